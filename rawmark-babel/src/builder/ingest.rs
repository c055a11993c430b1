//! Maps a parsed HTML fragment onto builder operations.
//!
//! Block elements become container nodes, inline elements become marks or
//! inline leaves, and unknown elements are transparent. Inline content that
//! appears directly in a block container is wrapped in a paragraph.
//! Elements stamped with the raw-HTML marker pass its value on as the
//! node's `raw_html` attribute.

use crate::builder::DocumentBuilder;
use crate::html::context::TaskState;
use crate::html::convert::text_without_trailing_newline;
use crate::html::fragment::{Element, Fragment, FragmentNode, RAW_HTML_ATTR};
use crate::html::sanitize::Sanitizer;
use crate::ir::nodes::{Attrs, Mark, MarkKind, NodeKind};

const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "br", "cite", "code", "del", "em", "font", "i", "img", "kbd", "label", "mark",
    "q", "s", "samp", "small", "span", "strike", "strong", "sub", "sup", "u", "var",
];

pub(crate) fn ingest<B: DocumentBuilder + ?Sized>(
    builder: &mut B,
    sanitizer: &dyn Sanitizer,
    fragment: &Fragment,
    block: bool,
) {
    let mut ingest = Ingest { builder, sanitizer };
    if block {
        ingest.flow(&fragment.children);
    } else {
        for node in &fragment.children {
            ingest.inline(node);
        }
    }
}

struct Ingest<'b, B: ?Sized> {
    builder: &'b mut B,
    sanitizer: &'b dyn Sanitizer,
}

fn is_inline(node: &FragmentNode) -> bool {
    match node {
        FragmentNode::Text(_) => true,
        FragmentNode::Element(element) => INLINE_ELEMENTS.contains(&element.name()),
    }
}

fn is_visible(node: &FragmentNode) -> bool {
    match node {
        FragmentNode::Text(text) => !text.trim().is_empty(),
        FragmentNode::Element(_) => true,
    }
}

fn raw_attrs(element: &Element) -> Attrs {
    Attrs {
        raw_html: element.attribute(RAW_HTML_ATTR).map(str::to_string),
        ..Default::default()
    }
}

impl<B: DocumentBuilder + ?Sized> Ingest<'_, B> {
    /// Block-level content: runs of inline nodes get an implicit paragraph.
    fn flow(&mut self, nodes: &[FragmentNode]) {
        let mut run: Vec<&FragmentNode> = Vec::new();
        for node in nodes {
            if is_inline(node) {
                run.push(node);
                continue;
            }
            self.flush(&mut run);
            if let FragmentNode::Element(element) = node {
                self.block(element);
            }
        }
        self.flush(&mut run);
    }

    fn flush(&mut self, run: &mut Vec<&FragmentNode>) {
        if run.iter().any(|node| is_visible(node)) {
            self.builder.open_node(NodeKind::Paragraph, Attrs::default());
            for node in run.iter() {
                self.inline(node);
            }
            self.builder.close_node();
        }
        run.clear();
    }

    fn block(&mut self, element: &Element) {
        let attrs = raw_attrs(element);
        match element.name() {
            "p" => self.textblock(NodeKind::Paragraph, attrs, element),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = element.name()[1..].parse().ok();
                self.textblock(NodeKind::Heading, Attrs { level, ..attrs }, element);
            }
            "blockquote" => self.container(NodeKind::BlockQuote, attrs, element),
            "ul" => self.container(NodeKind::BulletList, attrs, element),
            "ol" => self.container(NodeKind::OrderedList, attrs, element),
            "li" => {
                let state = TaskState {
                    task: element.attribute("data-task").is_some(),
                    checked: element.attribute("data-task-checked").is_some(),
                };
                let attrs = Attrs {
                    task: state.task,
                    checked: state.checked,
                    ..attrs
                };
                self.container(NodeKind::ListItem, attrs, element);
            }
            "table" => self.container(NodeKind::Table, attrs, element),
            "thead" => self.container(NodeKind::TableHead, attrs, element),
            "tbody" | "tfoot" => self.container(NodeKind::TableBody, attrs, element),
            "tr" => self.container(NodeKind::TableRow, attrs, element),
            "th" => self.container(NodeKind::TableHeadCell, attrs, element),
            "td" => self.container(NodeKind::TableBodyCell, attrs, element),
            "pre" => {
                let text = element
                    .find("code")
                    .map_or_else(|| element.text_content(), Element::text_content);
                self.builder.open_node(NodeKind::CodeBlock, attrs);
                self.builder.add_text(text_without_trailing_newline(&text));
                self.builder.close_node();
            }
            "hr" => self.builder.add_node(NodeKind::ThematicBreak, attrs),
            _ => self.flow(&element.children),
        }
    }

    fn textblock(&mut self, kind: NodeKind, attrs: Attrs, element: &Element) {
        self.builder.open_node(kind, attrs);
        for child in &element.children {
            self.inline(child);
        }
        self.builder.close_node();
    }

    fn container(&mut self, kind: NodeKind, attrs: Attrs, element: &Element) {
        self.builder.open_node(kind, attrs);
        self.flow(&element.children);
        self.builder.close_node();
    }

    fn inline(&mut self, node: &FragmentNode) {
        let element = match node {
            FragmentNode::Text(text) => {
                self.builder.add_text(text);
                return;
            }
            FragmentNode::Element(element) => element,
        };

        let attrs = raw_attrs(element);
        let mark = match element.name() {
            "b" | "strong" => Some(Mark::new(MarkKind::Strong, attrs)),
            "i" | "em" => Some(Mark::new(MarkKind::Emph, attrs)),
            "s" | "del" | "strike" => Some(Mark::new(MarkKind::Strike, attrs)),
            "code" => Some(Mark::new(MarkKind::Code, attrs)),
            "a" => {
                let href = element.attribute("href").unwrap_or_default();
                let link_url = Some(self.sanitizer.sanitize(href));
                Some(Mark::new(MarkKind::Link, Attrs { link_url, ..attrs }))
            }
            "img" => {
                self.image(element, attrs);
                return;
            }
            "br" => {
                self.builder.add_node(NodeKind::HardBreak, attrs);
                return;
            }
            _ => None,
        };

        match mark {
            Some(mark) => {
                let kind = mark.kind;
                self.builder.open_mark(mark);
                for child in &element.children {
                    self.inline(child);
                }
                self.builder.close_mark(kind);
            }
            None => {
                for child in &element.children {
                    self.inline(child);
                }
            }
        }
    }

    fn image(&mut self, element: &Element, attrs: Attrs) {
        let src = element.attribute("src").unwrap_or_default();
        if src.is_empty() {
            return;
        }
        let alt = element.attribute("alt").unwrap_or_default();
        let attrs = Attrs {
            image_url: Some(self.sanitizer.sanitize(src)),
            alt_text: (!alt.is_empty()).then(|| alt.to_string()),
            ..attrs
        };
        self.builder.add_node(NodeKind::Image, attrs);
    }
}
