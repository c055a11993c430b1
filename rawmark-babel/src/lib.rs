//! Raw HTML in markdown, imported as an editable document tree
//!
//!     Markdown lets authors drop raw HTML anywhere. A markdown parser keeps
//!     that HTML as opaque tokens: inline tags such as `<b>` and `</b>` arrive
//!     as unrelated siblings, and block-level markup arrives as one literal.
//!     This crate turns both into the structured nodes and marks of an
//!     editable tree, and stamps every node that came from raw HTML with the
//!     tag name it was written as, so an editor can write it back the same way.
//!
//!     TLDR:
//!         - The markdown side is comrak. We never parse markdown ourselves.
//!         - Block HTML is parsed with html5ever. We never parse HTML trees ourselves.
//!         - What we do own is a small tag grammar for single tags, a dispatch
//!           table from tag names to handlers, and the state machine that
//!           reconciles open and close tags that were never parsed as a tree.
//!
//! Architecture
//!
//!     Nothing in the conversion builds nodes directly. The markdown walker and
//!     the raw HTML state machine both issue operations against a
//!     [`builder::DocumentBuilder`] (open/close mark, open/close node, add leaf,
//!     add text, ingest a block of markup). The tree builder turns those into
//!     a [`ir::nodes::Document`]; the event recorder keeps them as a list,
//!     which is what most tests assert against.
//!
//!     This is a pure lib: no printing, no environment variables, no files.
//!     The rawmark-cli crate is the shell around it.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── source.rs              # Token arena: parent and sibling links
//!     ├── html
//!     │   ├── grammar.rs         # Single-tag recognizer
//!     │   ├── attributes.rs      # One attribute off one tag
//!     │   ├── dispatch.rs        # Tag name → handler
//!     │   ├── context.rs         # Sibling / parent predicates
//!     │   ├── convert.rs         # The per-token state machine
//!     │   ├── fragment.rs        # html5ever fragments and marker stamping
//!     │   └── sanitize.rs        # URL scheme filtering
//!     ├── builder                # DocumentBuilder, TreeBuilder, EventRecorder
//!     ├── markdown               # comrak walk
//!     └── ir                     # Editable tree, events, tree visualization
//!
//! Testing
//!
//!     Unit tests live next to the code and mostly assert on recorded events.
//!     tests/ holds end to end imports (markdown source → tree) and property
//!     tests for the tag grammar.
//!
//! Library Choices
//!
//!     comrak for markdown, html5ever (with markup5ever_rcdom) for HTML
//!     fragments, regex for the tag grammar, url for scheme checks, serde for
//!     the JSON view of the tree, and log for diagnostics.

pub mod builder;
pub mod error;
pub mod html;
pub mod ir;
pub mod markdown;
pub mod source;

pub use builder::{DocumentBuilder, EventRecorder, TreeBuilder};
pub use error::ConvertError;
pub use html::convert::HtmlConverter;
pub use html::dispatch::{default_tag_table, TagHandler, TagTable};
pub use html::fragment::{FragmentParser, Html5everParser};
pub use html::grammar::{match_tag_at_start, ParsedTag};
pub use html::sanitize::{Sanitizer, SchemeSanitizer};
pub use ir::nodes::Document;
pub use markdown::{parse_markdown, MarkdownImporter, MarkdownOptions};

/// Imports markdown with every extension enabled, the html5ever fragment
/// parser and the default URL sanitizer.
pub fn markdown_to_document(source: &str) -> Result<Document, ConvertError> {
    parse_markdown(source, &MarkdownOptions::default())
}
