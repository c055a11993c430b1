//! Defines the flat operation stream a conversion pass issues.

use crate::ir::nodes::{Attrs, Mark, MarkKind, NodeKind};

/// A single operation against a document builder.
///
/// Recording a pass as events makes the open/close sequence observable
/// without building a tree, which is how the state machine is tested.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    OpenMark(Mark),
    CloseMark(MarkKind),
    OpenNode(NodeKind, Attrs),
    CloseNode,
    AddNode(NodeKind, Attrs),
    AddText(String),
    IngestFragment { html: String, block: bool },
}
