//! Tag dispatch table
//!
//! Maps lower-cased tag names to a [`TagHandler`]. The table is built once
//! from a declarative list whose keys may name several tags, separated by
//! `", "`, that share one handler. Unknown names resolve to
//! [`TagHandler::Ignore`] instead of being absent.
//!
//! | Key                                    | Handler                 |
//! |----------------------------------------|-------------------------|
//! | `b, strong`                            | strong mark             |
//! | `i, em`                                | emphasis mark           |
//! | `s, del`                               | strike mark             |
//! | `code`                                 | code mark               |
//! | `a`                                    | link mark               |
//! | `img`                                  | image leaf              |
//! | `hr`                                   | thematic break leaf     |
//! | `br`                                   | line break (contextual) |
//! | `h1, ..., h6`, `blockquote`, table parts | delegated fragment    |
//! | `pre`                                  | code block              |
//! | `ul, ol`                               | list (contextual)       |
//! | `li`                                   | list item (contextual)  |

use crate::ir::nodes::MarkKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// What a recognized tag turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagHandler {
    /// Open on the open tag, close on the close tag.
    Mark(MarkKind),
    /// Link mark whose URL comes from `href`.
    Link,
    Image,
    ThematicBreak,
    LineBreak,
    /// Whole block handed to the fragment parser and re-ingested.
    Delegate,
    Preformatted,
    List,
    ListItem,
    Ignore,
}

/// The built-in declarative table.
pub const TAG_HANDLERS: &[(&str, TagHandler)] = &[
    ("b, strong", TagHandler::Mark(MarkKind::Strong)),
    ("i, em", TagHandler::Mark(MarkKind::Emph)),
    ("s, del", TagHandler::Mark(MarkKind::Strike)),
    ("code", TagHandler::Mark(MarkKind::Code)),
    ("a", TagHandler::Link),
    ("img", TagHandler::Image),
    ("hr", TagHandler::ThematicBreak),
    ("br", TagHandler::LineBreak),
    ("h1, h2, h3, h4, h5, h6", TagHandler::Delegate),
    ("blockquote", TagHandler::Delegate),
    ("table, thead, tbody, tfoot, tr, th, td", TagHandler::Delegate),
    ("pre", TagHandler::Preformatted),
    ("ul, ol", TagHandler::List),
    ("li", TagHandler::ListItem),
];

static DEFAULT_TABLE: Lazy<TagTable> = Lazy::new(TagTable::default);

/// The process-wide table built from [`TAG_HANDLERS`].
pub fn default_tag_table() -> &'static TagTable {
    &DEFAULT_TABLE
}

/// Immutable name → handler registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTable {
    handlers: HashMap<String, TagHandler>,
}

impl TagTable {
    /// Builds a table from `("name, name", handler)` entries.
    ///
    /// A name listed by more than one entry keeps the handler of the last one.
    pub fn from_entries(entries: &[(&str, TagHandler)]) -> Self {
        let mut handlers = HashMap::new();
        for (key, handler) in entries {
            for name in key.split(", ") {
                handlers.insert(name.to_lowercase(), *handler);
            }
        }
        Self { handlers }
    }

    /// Looks up a tag name, ignoring case.
    pub fn get(&self, name: &str) -> TagHandler {
        self.handlers
            .get(&name.to_lowercase())
            .copied()
            .unwrap_or(TagHandler::Ignore)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TagTable {
    fn default() -> Self {
        Self::from_entries(TAG_HANDLERS)
    }
}
