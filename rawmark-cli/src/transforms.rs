//! CLI output renderings
//!
//! The converted document can be printed three ways:
//!
//! - `json`:   the editable tree, pretty-printed
//! - `events`: the builder operations in the order they were issued, one per
//!   line; useful when a document comes out with the wrong shape
//! - `tree`:   an indented tree view with marks and raw HTML markers
//!
//! The `tag` subcommand is a debugging aid for the tag grammar alone.

use rawmark_babel::ir::events::Event;
use rawmark_babel::ir::treeviz::to_treeviz;
use rawmark_babel::{match_tag_at_start, ConvertError, MarkdownImporter, TagTable};
use rawmark_config::OutputFormat;

pub use crate::cli::AVAILABLE_FORMATS;

/// Imports `source` and renders it in the requested format.
pub fn render(
    source: &str,
    format: OutputFormat,
    importer: &MarkdownImporter<'_>,
) -> Result<String, ConvertError> {
    match format {
        OutputFormat::Json => {
            let doc = importer.import(source)?;
            Ok(format!("{}\n", doc.to_json()?))
        }
        OutputFormat::Events => {
            let events = importer.import_events(source)?;
            Ok(render_events(&events))
        }
        OutputFormat::Tree => {
            let doc = importer.import(source)?;
            Ok(to_treeviz(&doc))
        }
    }
}

/// One line per event, nested by open nodes.
pub fn render_events(events: &[Event]) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for event in events {
        if matches!(event, Event::CloseNode) {
            depth = depth.saturating_sub(1);
        }
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{event:?}\n"));
        if matches!(event, Event::OpenNode(..)) {
            depth += 1;
        }
    }
    out
}

/// Describes the tag at the start of `text`, or `None` if there is none.
pub fn describe_tag(text: &str, table: &TagTable) -> Option<String> {
    let tag = match_tag_at_start(text)?;
    Some(format!(
        "{} {} -> {:?} ({})",
        if tag.is_open { "open" } else { "close" },
        tag.name,
        table.get(tag.name),
        tag.raw_text
    ))
}

/// `name  handler` lines for every entry of the table, sorted by name.
pub fn list_tags(table: &TagTable) -> String {
    let mut names = table.names();
    names.sort_unstable();
    names
        .into_iter()
        .map(|name| format!("  {name:<12}{:?}\n", table.get(name)))
        .collect()
}
