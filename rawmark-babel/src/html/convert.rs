//! The conversion state machine
//!
//!     [`HtmlConverter::convert`] is called once per raw HTML token, in
//!     document order. The token's literal is matched against the tag
//!     grammar, the tag name selects a [`TagHandler`], and the handler issues
//!     operations against the builder.
//!
//!     The tokens were never parsed as a tree: `<b>` and `</b>` are two
//!     unrelated siblings. Marks therefore stay open across tokens until the
//!     close tag arrives, and structural tags inside table cells (`ul`, `ol`,
//!     `li`, `br`) look at their neighbors to decide whether an implicit
//!     paragraph has to be closed before, or opened after, them.
//!
//!     Open and close tags are assumed to come in pairs; the markdown parser
//!     guarantees that. Nothing here detects an unmatched close.

use crate::builder::DocumentBuilder;
use crate::error::ConvertError;
use crate::html::attributes::extract_attribute;
use crate::html::context::{
    in_table_cell, next_is_non_list, next_is_plain_inline, prev_is_non_list,
    prev_is_plain_inline, task_state,
};
use crate::html::dispatch::{default_tag_table, TagHandler, TagTable};
use crate::html::fragment::{stamp_raw_html, FragmentParser};
use crate::html::grammar::{match_tag_at_start, ParsedTag};
use crate::html::sanitize::Sanitizer;
use crate::ir::nodes::{Attrs, Mark, MarkKind, NodeKind};
use crate::source::{TokenArena, TokenId, TokenKind};

/// Strips exactly one trailing `\n`, if there is one.
pub fn text_without_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

/// Converts raw HTML tokens into builder operations.
///
/// Holds only shared, read-only collaborators; the mutable state of a pass
/// lives in the builder handed to [`HtmlConverter::convert`].
#[derive(Clone, Copy)]
pub struct HtmlConverter<'a> {
    table: &'a TagTable,
    parser: &'a dyn FragmentParser,
    sanitizer: &'a dyn Sanitizer,
}

impl<'a> HtmlConverter<'a> {
    pub fn new(
        table: &'a TagTable,
        parser: &'a dyn FragmentParser,
        sanitizer: &'a dyn Sanitizer,
    ) -> Self {
        Self {
            table,
            parser,
            sanitizer,
        }
    }

    /// Converter using the process-wide default tag table.
    pub fn with_default_table(
        parser: &'a dyn FragmentParser,
        sanitizer: &'a dyn Sanitizer,
    ) -> Self {
        Self::new(default_tag_table(), parser, sanitizer)
    }

    /// Handles the raw HTML token `id`.
    ///
    /// Tokens whose literal is not an open or close tag, and tags without a
    /// handler, produce no operations.
    pub fn convert<B: DocumentBuilder + ?Sized>(
        &self,
        builder: &mut B,
        arena: &TokenArena,
        id: TokenId,
    ) -> Result<(), ConvertError> {
        let literal = arena[id].literal();
        let Some(tag) = match_tag_at_start(literal) else {
            log::trace!(target: "rawmark.convert", "no tag in {literal:?}");
            return Ok(());
        };
        let handler = self.table.get(tag.name);
        log::trace!(
            target: "rawmark.convert",
            "{} {} -> {handler:?}",
            if tag.is_open { "open" } else { "close" },
            tag.name
        );

        let mut pass = Pass {
            converter: self,
            builder,
            arena,
            id,
            tag,
        };
        match handler {
            TagHandler::Mark(kind) => {
                pass.mark(kind);
                Ok(())
            }
            TagHandler::Link => pass.link(),
            TagHandler::Image => pass.image(),
            TagHandler::ThematicBreak => {
                pass.thematic_break();
                Ok(())
            }
            TagHandler::LineBreak => {
                pass.line_break();
                Ok(())
            }
            TagHandler::Delegate => pass.delegate(),
            TagHandler::Preformatted => pass.preformatted(),
            TagHandler::List => pass.list(),
            TagHandler::ListItem => pass.list_item(),
            TagHandler::Ignore => {
                log::debug!(target: "rawmark.convert", "no handler for <{}>", tag.name);
                Ok(())
            }
        }
    }
}

/// One handler invocation.
struct Pass<'c, 'a, 't, B: ?Sized> {
    converter: &'c HtmlConverter<'a>,
    builder: &'c mut B,
    arena: &'c TokenArena,
    id: TokenId,
    tag: ParsedTag<'t>,
}

impl<B: DocumentBuilder + ?Sized> Pass<'_, '_, '_, B> {
    fn literal(&self) -> &str {
        self.arena[self.id].literal()
    }

    fn attribute(&self, name: &str) -> Result<String, ConvertError> {
        extract_attribute(self.converter.parser, self.literal(), name)
    }

    fn mark(&mut self, kind: MarkKind) {
        if self.tag.is_open {
            let mark = Mark::new(kind, Attrs::raw_html(self.tag.name));
            self.builder.open_mark(mark);
        } else {
            self.builder.close_mark(kind);
        }
    }

    fn link(&mut self) -> Result<(), ConvertError> {
        if !self.tag.is_open {
            self.builder.close_mark(MarkKind::Link);
            return Ok(());
        }
        let href = self.attribute("href")?;
        let attrs = Attrs {
            link_url: Some(self.converter.sanitizer.sanitize(&href)),
            ..Attrs::raw_html(self.tag.name)
        };
        self.builder.open_mark(Mark::new(MarkKind::Link, attrs));
        Ok(())
    }

    fn image(&mut self) -> Result<(), ConvertError> {
        if !self.tag.is_open {
            return Ok(());
        }
        let src = self.attribute("src")?;
        if src.is_empty() {
            log::debug!(target: "rawmark.convert", "dropping <{}> without src", self.tag.name);
            return Ok(());
        }
        let alt = self.attribute("alt")?;
        let attrs = Attrs {
            image_url: Some(self.converter.sanitizer.sanitize(&src)),
            alt_text: (!alt.is_empty()).then_some(alt),
            ..Attrs::raw_html(self.tag.name)
        };
        self.builder.add_node(NodeKind::Image, attrs);
        Ok(())
    }

    fn thematic_break(&mut self) {
        if self.tag.is_open {
            self.builder
                .add_node(NodeKind::ThematicBreak, Attrs::raw_html(self.tag.name));
        }
    }

    /// A bare `<br>` splits or ends the block around it. In a paragraph,
    /// content before it opens a new paragraph and content after it closes
    /// the current container.
    fn line_break(&mut self) {
        let token = &self.arena[self.id];
        match self.arena.parent_kind(self.id) {
            Some(TokenKind::Paragraph) => {
                if token.prev().is_some() {
                    self.builder.open_node(NodeKind::Paragraph, Attrs::default());
                }
                if token.next().is_some() {
                    self.builder.close_node();
                }
            }
            Some(TokenKind::TableCell) => {
                if prev_is_plain_inline(self.arena, self.id) {
                    self.builder.close_node();
                }
                if next_is_plain_inline(self.arena, self.id) {
                    self.builder.open_node(NodeKind::Paragraph, Attrs::default());
                }
            }
            _ => {}
        }
    }

    /// Parses the whole block, stamps it and hands it to the builder.
    fn delegate(&mut self) -> Result<(), ConvertError> {
        if !self.tag.is_open {
            return Ok(());
        }
        let fragment = self.converter.parser.parse(self.literal())?;
        let html = stamp_raw_html(&fragment).to_html()?;
        self.builder.ingest_fragment(&html, true)
    }

    fn preformatted(&mut self) -> Result<(), ConvertError> {
        if !self.tag.is_open {
            return Ok(());
        }
        let fragment = self.converter.parser.parse(self.literal())?;
        let text = match fragment.first_element() {
            Some(pre) => pre
                .find("code")
                .map_or_else(|| pre.text_content(), |code| code.text_content()),
            None => String::new(),
        };
        self.builder
            .open_node(NodeKind::CodeBlock, Attrs::raw_html(self.tag.name));
        self.builder.add_text(text_without_trailing_newline(&text));
        self.builder.close_node();
        Ok(())
    }

    /// `ul`/`ol`: managed inline inside table cells, delegated elsewhere.
    fn list(&mut self) -> Result<(), ConvertError> {
        if !in_table_cell(self.arena, self.id) {
            return self.delegate();
        }
        if self.tag.is_open {
            if prev_is_non_list(self.arena, self.id) {
                self.builder.close_node();
            }
            let kind = if self.tag.name_is("ol") {
                NodeKind::OrderedList
            } else {
                NodeKind::BulletList
            };
            self.builder.open_node(kind, Attrs::raw_html(self.tag.name));
        } else {
            self.builder.close_node();
            if next_is_non_list(self.arena, self.id) {
                self.builder.open_node(NodeKind::Paragraph, Attrs::default());
            }
        }
        Ok(())
    }

    fn list_item(&mut self) -> Result<(), ConvertError> {
        if !in_table_cell(self.arena, self.id) {
            return self.delegate();
        }
        if self.tag.is_open {
            let state = task_state(self.literal());
            if prev_is_non_list(self.arena, self.id) {
                self.builder.close_node();
            }
            let attrs = Attrs {
                task: state.task,
                checked: state.checked,
                ..Attrs::raw_html(self.tag.name)
            };
            self.builder.open_node(NodeKind::ListItem, attrs);
            if next_is_non_list(self.arena, self.id) {
                self.builder.open_node(NodeKind::Paragraph, Attrs::default());
            }
        } else {
            if prev_is_non_list(self.arena, self.id) {
                self.builder.close_node();
            }
            self.builder.close_node();
        }
        Ok(())
    }
}
