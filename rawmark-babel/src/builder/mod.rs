//! Document builders
//!
//!     A conversion pass never constructs nodes directly. It issues operations
//!     against a [`DocumentBuilder`]: open and close marks, open and close
//!     container nodes, add leaves and text, and hand over blocks of markup
//!     for the builder to ingest on its own.
//!
//!     Two builders ship with the crate:
//!         - [`TreeBuilder`] keeps an open-node stack and an active mark set and
//!           produces the editable tree ([`crate::ir::nodes::Document`]).
//!         - [`EventRecorder`] records the operations as [`crate::ir::events::Event`]s.
//!
//!     Nodes opened with `open_node` close in LIFO order: `close_node` always
//!     closes the most recently opened node. Marks are a set, so they may be
//!     closed in any order relative to each other.

mod ingest;
mod recorder;
mod tree;

pub use recorder::EventRecorder;
pub use tree::TreeBuilder;

use crate::error::ConvertError;
use crate::ir::nodes::{Attrs, Mark, MarkKind, NodeKind};

pub trait DocumentBuilder {
    /// Activates a mark; it applies to every inline leaf added until closed.
    fn open_mark(&mut self, mark: Mark);

    fn close_mark(&mut self, kind: MarkKind);

    /// Opens a container node as a child of the current one.
    fn open_node(&mut self, kind: NodeKind, attrs: Attrs);

    /// Closes the most recently opened node.
    fn close_node(&mut self);

    /// Number of nodes opened and not yet closed.
    fn depth(&self) -> usize;

    /// Adds a leaf node to the current container.
    fn add_node(&mut self, kind: NodeKind, attrs: Attrs);

    fn add_text(&mut self, text: &str);

    /// Parses `html` with the builder's own fragment parser and appends the
    /// resulting nodes. `block` tells whether the markup sits at block level.
    fn ingest_fragment(&mut self, html: &str, block: bool) -> Result<(), ConvertError>;
}
