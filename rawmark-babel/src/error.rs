//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting markdown and raw HTML
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The fragment parser could not read a block of raw HTML
    FragmentParse(String),
    /// The editable tree could not be serialized
    Serialization(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::FragmentParse(msg) => write!(f, "Fragment parse error: {msg}"),
            ConvertError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
