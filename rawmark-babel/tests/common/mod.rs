//! Shared helpers for the import tests.

use rawmark_babel::ir::nodes::{Document, Node, NodeKind};
use rawmark_babel::markdown_to_document;
use std::path::PathBuf;

pub fn import(md: &str) -> Document {
    markdown_to_document(md).expect("markdown should import")
}

pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// The only node of `kind` in the document.
pub fn only<'a>(doc: &'a Document, kind: NodeKind) -> &'a Node {
    let found = doc.find_all(kind);
    assert_eq!(found.len(), 1, "expected exactly one {kind:?}, got {found:#?}");
    found[0]
}

pub fn kinds(nodes: &[Node]) -> Vec<NodeKind> {
    nodes.iter().map(|node| node.kind).collect()
}

pub fn raw_html(node: &Node) -> Option<&str> {
    node.attrs.raw_html.as_deref()
}
