//! Markdown import
//!
//! Parses markdown with `comrak` and drives a [`DocumentBuilder`] through the
//! result. Native markdown maps directly onto nodes and marks; every raw HTML
//! token (inline or block) goes through the conversion state machine in
//! [`crate::html::convert`].
//!
//! # Library Choice
//!
//! `comrak` gives a full CommonMark tree with the GFM extensions we need
//! (tables, strikethrough, autolinks, task lists) and keeps raw HTML as
//! `HtmlInline`/`HtmlBlock` nodes with their literal text intact.
//!
//! # Element Mapping
//!
//! | Markdown                | Editable tree                              |
//! |-------------------------|--------------------------------------------|
//! | Paragraph               | Paragraph                                  |
//! | Heading (# .. ######)   | Heading, `level` 1-6                       |
//! | Block quote             | BlockQuote                                 |
//! | List / task list        | BulletList or OrderedList, ListItem        |
//! | Code block              | CodeBlock, `language` from the info string |
//! | Thematic break          | ThematicBreak                              |
//! | Table                   | Table, TableHead/TableBody, TableRow, cells|
//! | Emphasis, strong, ~~ ~~ | Emph, Strong, Strike marks                 |
//! | Code span               | Code mark                                  |
//! | Link / image            | Link mark / Image, URLs sanitized          |
//! | Hard break              | HardBreak                                  |
//! | Raw HTML                | see [`crate::html::convert`]               |

mod parser;

use crate::builder::{DocumentBuilder, EventRecorder, TreeBuilder};
use crate::error::ConvertError;
use crate::html::dispatch::{default_tag_table, TagTable};
use crate::html::fragment::{FragmentParser, Html5everParser};
use crate::html::sanitize::{Sanitizer, SchemeSanitizer};
use crate::ir::events::Event;
use crate::ir::nodes::Document;
use comrak::ComrakOptions;

/// Markdown extensions to enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
        }
    }
}

impl MarkdownOptions {
    fn to_comrak(self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = self.tables;
        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;
        options
    }
}

/// Imports markdown into an editable tree.
///
/// The fragment parser and sanitizer are shared by the conversion state
/// machine and the tree builder; the tag table defaults to the built-in one.
pub struct MarkdownImporter<'a> {
    options: MarkdownOptions,
    table: &'a TagTable,
    parser: &'a dyn FragmentParser,
    sanitizer: &'a dyn Sanitizer,
}

impl<'a> MarkdownImporter<'a> {
    pub fn new(parser: &'a dyn FragmentParser, sanitizer: &'a dyn Sanitizer) -> Self {
        Self {
            options: MarkdownOptions::default(),
            table: default_tag_table(),
            parser,
            sanitizer,
        }
    }

    pub fn with_options(mut self, options: MarkdownOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_tag_table(mut self, table: &'a TagTable) -> Self {
        self.table = table;
        self
    }

    pub fn options(&self) -> MarkdownOptions {
        self.options
    }

    /// Parses `source` and builds the editable tree.
    pub fn import(&self, source: &str) -> Result<Document, ConvertError> {
        let mut builder = TreeBuilder::new(self.parser, self.sanitizer);
        self.run(source, &mut builder)?;
        Ok(builder.finish())
    }

    /// Parses `source` and returns the builder operations it produces,
    /// without building a tree.
    pub fn import_events(&self, source: &str) -> Result<Vec<Event>, ConvertError> {
        let mut recorder = EventRecorder::new();
        self.run(source, &mut recorder)?;
        Ok(recorder.into_events())
    }

    /// Drives an arbitrary builder through `source`.
    pub fn run<B: DocumentBuilder + ?Sized>(
        &self,
        source: &str,
        builder: &mut B,
    ) -> Result<(), ConvertError> {
        parser::walk_markdown(
            source,
            &self.options.to_comrak(),
            self.table,
            self.parser,
            self.sanitizer,
            builder,
        )
    }
}

/// Imports markdown with the html5ever fragment parser and the default URL
/// sanitizer.
pub fn parse_markdown(source: &str, options: &MarkdownOptions) -> Result<Document, ConvertError> {
    let sanitizer = SchemeSanitizer::default();
    MarkdownImporter::new(&Html5everParser, &sanitizer)
        .with_options(*options)
        .import(source)
}
