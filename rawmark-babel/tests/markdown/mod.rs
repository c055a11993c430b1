//! Markdown import tests
//!
//! Markdown source in, editable tree out. Raw HTML is mixed into most inputs.

mod import;
mod kitchensink;
mod table;
