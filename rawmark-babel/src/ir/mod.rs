//! The editable tree produced by a conversion pass.
//!
//! `nodes` holds the schema-typed tree (nodes, marks and their attributes),
//! `events` the flat builder operations that produce it, and `treeviz` a
//! plain-text rendering used for inspection.

pub mod events;
pub mod nodes;
pub mod treeviz;
