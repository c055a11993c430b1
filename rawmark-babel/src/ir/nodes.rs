//! Core data structures for the editable tree.

use crate::error::ConvertError;
use serde::Serialize;

/// Structural node types of the editable tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Paragraph,
    Heading,
    BlockQuote,
    BulletList,
    OrderedList,
    ListItem,
    CodeBlock,
    ThematicBreak,
    Image,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableHeadCell,
    TableBodyCell,
    HardBreak,
    Text,
}

impl NodeKind {
    /// Leaf nodes never receive children.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::ThematicBreak | NodeKind::Image | NodeKind::HardBreak | NodeKind::Text
        )
    }

    /// Inline leaves pick up the marks that are active when they are added.
    pub fn is_inline(self) -> bool {
        matches!(self, NodeKind::Image | NodeKind::HardBreak | NodeKind::Text)
    }
}

/// Span-level annotation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkKind {
    Strong,
    Emph,
    Strike,
    Code,
    Link,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Attributes shared by nodes and marks.
///
/// `raw_html` records the tag name an author typed, so the element can be
/// re-emitted with its original spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "is_false")]
    pub task: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub checked: bool,
}

impl Attrs {
    /// Attributes carrying only the original tag spelling.
    pub fn raw_html(tag_name: impl Into<String>) -> Self {
        Self {
            raw_html: Some(tag_name.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A span-level annotation such as bold or a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mark {
    pub kind: MarkKind,
    #[serde(skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
}

impl Mark {
    pub fn new(kind: MarkKind, attrs: Attrs) -> Self {
        Self { kind, attrs }
    }
}

/// A node of the editable tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl Node {
    pub fn new(kind: NodeKind, attrs: Attrs) -> Self {
        Self {
            kind,
            attrs,
            children: Vec::new(),
            text: None,
            marks: Vec::new(),
        }
    }

    /// Creates a text leaf carrying the given marks.
    pub fn text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            kind: NodeKind::Text,
            attrs: Attrs::default(),
            children: Vec::new(),
            text: Some(text.into()),
            marks,
        }
    }

    /// Returns the mark of the given kind, if this node carries one.
    pub fn mark(&self, kind: MarkKind) -> Option<&Mark> {
        self.marks.iter().find(|mark| mark.kind == kind)
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// All descendants (excluding `self`) of the given kind, in document order.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&Node> {
        let mut found = Vec::new();
        for child in &self.children {
            collect_kind(child, kind, &mut found);
        }
        found
    }
}

fn collect_text(node: &Node, out: &mut String) {
    if let Some(text) = &node.text {
        out.push_str(text);
    }
    for child in &node.children {
        collect_text(child, out);
    }
}

fn collect_kind<'a>(node: &'a Node, kind: NodeKind, found: &mut Vec<&'a Node>) {
    if node.kind == kind {
        found.push(node);
    }
    for child in &node.children {
        collect_kind(child, kind, found);
    }
}

/// The root of an editable tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    /// All nodes of the given kind, in document order.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&Node> {
        let mut found = Vec::new();
        for child in &self.children {
            collect_kind(child, kind, &mut found);
        }
        found
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut out);
        }
        out
    }

    pub fn to_json(&self) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(self).map_err(|e| ConvertError::Serialization(e.to_string()))
    }
}
