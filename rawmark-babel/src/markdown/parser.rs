//! Markdown walking (comrak tree → builder operations)
//!
//! Pipeline: markdown string → comrak AST → token arena → builder calls.
//!
//! The comrak tree is copied into a [`TokenArena`] first, in the same child
//! order, so the raw HTML state machine can ask about parents and siblings
//! without touching comrak's `RefCell`s. The walk then visits both trees in
//! lockstep: each comrak node is paired with the token that mirrors it.

use crate::builder::DocumentBuilder;
use crate::error::ConvertError;
use crate::html::context::is_plain_inline;
use crate::html::convert::{text_without_trailing_newline, HtmlConverter};
use crate::html::dispatch::TagTable;
use crate::html::fragment::FragmentParser;
use crate::html::sanitize::Sanitizer;
use crate::ir::nodes::{Attrs, Mark, MarkKind, NodeKind};
use crate::source::{TokenArena, TokenId, TokenKind};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

pub(super) fn walk_markdown<B: DocumentBuilder + ?Sized>(
    source: &str,
    options: &ComrakOptions,
    table: &TagTable,
    parser: &dyn FragmentParser,
    sanitizer: &dyn Sanitizer,
    builder: &mut B,
) -> Result<(), ConvertError> {
    let arena = Arena::new();
    let root = parse_document(&arena, source, options);

    let mut tokens = TokenArena::new();
    let token_root = tokens.root();
    index_children(&mut tokens, token_root, root);
    log::debug!(target: "rawmark.convert", "indexed {} markdown tokens", tokens.len());

    let mut walker = Walker {
        builder,
        tokens: &tokens,
        converter: HtmlConverter::new(table, parser, sanitizer),
        sanitizer,
    };
    walker.blocks(root, token_root)
}

/// Mirrors the children of `node` under `parent`, recursively.
fn index_children<'a>(tokens: &mut TokenArena, parent: TokenId, node: &'a AstNode<'a>) {
    for child in node.children() {
        let id = {
            let data = child.data.borrow();
            let (kind, literal) = classify(&data.value);
            tokens.push(parent, kind, literal)
        };
        index_children(tokens, id, child);
    }
}

fn classify(value: &NodeValue) -> (TokenKind, &str) {
    match value {
        NodeValue::Document => (TokenKind::Document, ""),
        NodeValue::Paragraph => (TokenKind::Paragraph, ""),
        NodeValue::TableCell => (TokenKind::TableCell, ""),
        NodeValue::Text(text) => (TokenKind::Text, text.as_str()),
        NodeValue::HtmlInline(html) => (TokenKind::HtmlInline, html.as_str()),
        NodeValue::HtmlBlock(html) => (TokenKind::HtmlBlock, html.literal.as_str()),
        NodeValue::Code(code) => (TokenKind::Inline, code.literal.as_str()),
        NodeValue::Emph
        | NodeValue::Strong
        | NodeValue::Strikethrough
        | NodeValue::Link(_)
        | NodeValue::Image(_)
        | NodeValue::SoftBreak
        | NodeValue::LineBreak => (TokenKind::Inline, ""),
        _ if value.block() => (TokenKind::Block, ""),
        _ => (TokenKind::Inline, ""),
    }
}

struct Walker<'w, B: ?Sized> {
    builder: &'w mut B,
    tokens: &'w TokenArena,
    converter: HtmlConverter<'w>,
    sanitizer: &'w dyn Sanitizer,
}

impl<B: DocumentBuilder + ?Sized> Walker<'_, B> {
    fn blocks<'a>(&mut self, node: &'a AstNode<'a>, id: TokenId) -> Result<(), ConvertError> {
        let tokens = self.tokens;
        for (child, child_id) in node.children().zip(tokens.children(id)) {
            self.block(child, child_id)?;
        }
        Ok(())
    }

    fn inlines<'a>(&mut self, node: &'a AstNode<'a>, id: TokenId) -> Result<(), ConvertError> {
        let tokens = self.tokens;
        for (child, child_id) in node.children().zip(tokens.children(id)) {
            self.inline(child, child_id)?;
        }
        Ok(())
    }

    fn block<'a>(&mut self, node: &'a AstNode<'a>, id: TokenId) -> Result<(), ConvertError> {
        let data = node.data.borrow();

        match &data.value {
            NodeValue::Paragraph => {
                // Raw <br> tags may open or close paragraphs of their own.
                let depth = self.builder.depth();
                self.builder.open_node(NodeKind::Paragraph, Attrs::default());
                self.inlines(node, id)?;
                self.close_to(depth);
            }

            NodeValue::Heading(heading) => {
                let attrs = Attrs {
                    level: Some(heading.level),
                    ..Default::default()
                };
                self.builder.open_node(NodeKind::Heading, attrs);
                self.inlines(node, id)?;
                self.builder.close_node();
            }

            NodeValue::BlockQuote => {
                self.builder.open_node(NodeKind::BlockQuote, Attrs::default());
                self.blocks(node, id)?;
                self.builder.close_node();
            }

            NodeValue::List(list) => {
                let kind = match list.list_type {
                    ListType::Ordered => NodeKind::OrderedList,
                    ListType::Bullet => NodeKind::BulletList,
                };
                self.builder.open_node(kind, Attrs::default());
                self.blocks(node, id)?;
                self.builder.close_node();
            }

            NodeValue::Item(_) => {
                self.builder.open_node(NodeKind::ListItem, Attrs::default());
                self.blocks(node, id)?;
                self.builder.close_node();
            }

            NodeValue::TaskItem(symbol) => {
                let attrs = Attrs {
                    task: true,
                    checked: symbol.is_some(),
                    ..Default::default()
                };
                self.builder.open_node(NodeKind::ListItem, attrs);
                self.blocks(node, id)?;
                self.builder.close_node();
            }

            NodeValue::CodeBlock(code_block) => {
                let attrs = Attrs {
                    language: code_block.info.split_whitespace().next().map(str::to_string),
                    ..Default::default()
                };
                self.builder.open_node(NodeKind::CodeBlock, attrs);
                self.builder
                    .add_text(text_without_trailing_newline(&code_block.literal));
                self.builder.close_node();
            }

            NodeValue::ThematicBreak => {
                self.builder.add_node(NodeKind::ThematicBreak, Attrs::default());
            }

            NodeValue::HtmlBlock(_) => {
                self.converter.convert(&mut *self.builder, self.tokens, id)?;
            }

            NodeValue::Table(_) => self.table(node, id)?,

            NodeValue::FrontMatter(_) => {
                log::debug!(target: "rawmark.convert", "skipping front matter");
            }

            other => {
                log::debug!(target: "rawmark.convert", "no mapping for block {other:?}; walking children");
                self.blocks(node, id)?;
            }
        }

        Ok(())
    }

    /// Closes open nodes until the builder is back at `depth`. Does nothing
    /// if raw HTML already closed past it.
    fn close_to(&mut self, depth: usize) {
        while self.builder.depth() > depth {
            self.builder.close_node();
        }
    }

    /// Header rows go into a table head, the rest into one table body.
    fn table<'a>(&mut self, node: &'a AstNode<'a>, id: TokenId) -> Result<(), ConvertError> {
        self.builder.open_node(NodeKind::Table, Attrs::default());
        let mut body_open = false;

        let tokens = self.tokens;
        for (row, row_id) in node.children().zip(tokens.children(id)) {
            let header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
            if header {
                self.builder.open_node(NodeKind::TableHead, Attrs::default());
                self.table_row(row, row_id, NodeKind::TableHeadCell)?;
                self.builder.close_node();
            } else {
                if !body_open {
                    self.builder.open_node(NodeKind::TableBody, Attrs::default());
                    body_open = true;
                }
                self.table_row(row, row_id, NodeKind::TableBodyCell)?;
            }
        }

        if body_open {
            self.builder.close_node();
        }
        self.builder.close_node();
        Ok(())
    }

    fn table_row<'a>(
        &mut self,
        row: &'a AstNode<'a>,
        id: TokenId,
        cell_kind: NodeKind,
    ) -> Result<(), ConvertError> {
        self.builder.open_node(NodeKind::TableRow, Attrs::default());
        let tokens = self.tokens;
        for (cell, cell_id) in row.children().zip(tokens.children(id)) {
            let depth = self.builder.depth();
            self.builder.open_node(cell_kind, Attrs::default());
            self.table_cell(cell, cell_id)?;
            self.close_to(depth);
        }
        self.builder.close_node();
        Ok(())
    }

    /// Cell content is inline; text at either edge sits in an implicit
    /// paragraph. Raw list and break tags in between open and close the
    /// paragraphs around themselves.
    fn table_cell<'a>(&mut self, cell: &'a AstNode<'a>, id: TokenId) -> Result<(), ConvertError> {
        let first = self.tokens.children(id).next();
        let last = self.tokens.children(id).last();
        let opens = first.is_some_and(|first| is_plain_inline(self.tokens, first));
        let closes = last.is_some_and(|last| is_plain_inline(self.tokens, last));

        if opens {
            self.builder.open_node(NodeKind::Paragraph, Attrs::default());
        }
        self.inlines(cell, id)?;
        if closes {
            self.builder.close_node();
        }
        Ok(())
    }

    fn inline<'a>(&mut self, node: &'a AstNode<'a>, id: TokenId) -> Result<(), ConvertError> {
        let data = node.data.borrow();

        match &data.value {
            NodeValue::Text(text) => self.builder.add_text(text),

            NodeValue::SoftBreak => self.builder.add_text(" "),

            NodeValue::LineBreak => self.builder.add_node(NodeKind::HardBreak, Attrs::default()),

            NodeValue::Code(code) => {
                self.builder
                    .open_mark(Mark::new(MarkKind::Code, Attrs::default()));
                self.builder.add_text(&code.literal);
                self.builder.close_mark(MarkKind::Code);
            }

            NodeValue::Emph => self.marked(node, id, MarkKind::Emph, Attrs::default())?,

            NodeValue::Strong => self.marked(node, id, MarkKind::Strong, Attrs::default())?,

            NodeValue::Strikethrough => {
                self.marked(node, id, MarkKind::Strike, Attrs::default())?
            }

            NodeValue::Link(link) => {
                let attrs = Attrs {
                    link_url: Some(self.sanitizer.sanitize(&link.url)),
                    ..Default::default()
                };
                self.marked(node, id, MarkKind::Link, attrs)?;
            }

            NodeValue::Image(link) => {
                let alt = collect_text(node);
                let attrs = Attrs {
                    image_url: Some(self.sanitizer.sanitize(&link.url)),
                    alt_text: (!alt.is_empty()).then_some(alt),
                    ..Default::default()
                };
                self.builder.add_node(NodeKind::Image, attrs);
            }

            NodeValue::HtmlInline(_) => {
                self.converter.convert(&mut *self.builder, self.tokens, id)?;
            }

            _ => self.inlines(node, id)?,
        }

        Ok(())
    }

    fn marked<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        id: TokenId,
        kind: MarkKind,
        attrs: Attrs,
    ) -> Result<(), ConvertError> {
        self.builder.open_mark(Mark::new(kind, attrs));
        self.inlines(node, id)?;
        self.builder.close_mark(kind);
        Ok(())
    }
}

/// Plain text of an inline subtree, for image alt text.
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.descendants().skip(1) {
        match &child.data.borrow().value {
            NodeValue::Text(value) => text.push_str(value),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}
