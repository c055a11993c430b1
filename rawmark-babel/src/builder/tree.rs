//! Stack-based construction of the editable tree.
//!
//! The bottom of the stack is the document root. `open_node` pushes a new
//! container, `close_node` pops it and appends it to the container below,
//! and leaves go straight into the container on top. Text picks up a copy of
//! the active mark set; consecutive text with identical marks is merged.

use crate::builder::{ingest, DocumentBuilder};
use crate::error::ConvertError;
use crate::html::fragment::FragmentParser;
use crate::html::sanitize::Sanitizer;
use crate::ir::nodes::{Attrs, Document, Mark, MarkKind, Node, NodeKind};

/// A container that has been opened but not closed yet. The root has no kind.
#[derive(Debug, Default)]
struct OpenContainer {
    kind: Option<NodeKind>,
    attrs: Attrs,
    children: Vec<Node>,
}

pub struct TreeBuilder<'a> {
    parser: &'a dyn FragmentParser,
    sanitizer: &'a dyn Sanitizer,
    stack: Vec<OpenContainer>,
    marks: Vec<Mark>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(parser: &'a dyn FragmentParser, sanitizer: &'a dyn Sanitizer) -> Self {
        Self {
            parser,
            sanitizer,
            stack: vec![OpenContainer::default()],
            marks: Vec::new(),
        }
    }

    /// Kind of the innermost open container, `None` at the document root.
    pub fn current_kind(&self) -> Option<NodeKind> {
        self.stack.last().and_then(|open| open.kind)
    }

    pub fn active_marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Closes anything left open and returns the finished document.
    pub fn finish(mut self) -> Document {
        if self.depth() > 0 {
            log::warn!(
                target: "rawmark.builder",
                "{} node(s) left open at end of document; closing them",
                self.depth()
            );
        }
        while self.depth() > 0 {
            self.close_node();
        }
        let root = self.stack.pop().map(|open| open.children);
        Document {
            children: root.unwrap_or_default(),
        }
    }

    /// Children of the innermost open container.
    fn current(&mut self) -> &mut Vec<Node> {
        // The root is never popped before `finish`.
        let top = self.stack.len() - 1;
        &mut self.stack[top].children
    }
}

impl DocumentBuilder for TreeBuilder<'_> {
    fn open_mark(&mut self, mark: Mark) {
        match self.marks.iter_mut().find(|open| open.kind == mark.kind) {
            Some(open) => *open = mark,
            None => self.marks.push(mark),
        }
    }

    fn close_mark(&mut self, kind: MarkKind) {
        self.marks.retain(|mark| mark.kind != kind);
    }

    fn open_node(&mut self, kind: NodeKind, attrs: Attrs) {
        log::trace!(target: "rawmark.builder", "open {kind:?} at depth {}", self.depth());
        self.stack.push(OpenContainer {
            kind: Some(kind),
            attrs,
            children: Vec::new(),
        });
    }

    fn close_node(&mut self) {
        if self.depth() == 0 {
            log::warn!(target: "rawmark.builder", "close with no open node; ignoring");
            return;
        }
        if let Some(OpenContainer {
            kind: Some(kind),
            attrs,
            children,
        }) = self.stack.pop()
        {
            log::trace!(target: "rawmark.builder", "close {kind:?}");
            let mut node = Node::new(kind, attrs);
            node.children = children;
            self.current().push(node);
        }
    }

    fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    fn add_node(&mut self, kind: NodeKind, attrs: Attrs) {
        let mut node = Node::new(kind, attrs);
        if kind.is_inline() {
            node.marks = self.marks.clone();
        }
        self.current().push(node);
    }

    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let marks = self.marks.clone();
        let current = self.current();
        if let Some(last) = current.last_mut() {
            if last.kind == NodeKind::Text && last.marks == marks {
                if let Some(existing) = last.text.as_mut() {
                    existing.push_str(text);
                    return;
                }
            }
        }
        current.push(Node::text(text, marks));
    }

    fn ingest_fragment(&mut self, html: &str, block: bool) -> Result<(), ConvertError> {
        let parser = self.parser;
        let sanitizer = self.sanitizer;
        let fragment = parser.parse(html)?;
        ingest::ingest(self, sanitizer, &fragment, block);
        Ok(())
    }
}
