//! Raw HTML handling
//!
//!     Markdown parsers hand raw HTML through as opaque tokens. This module
//!     turns those tokens into builder operations:
//!         - grammar.rs: recognizes an open or close tag at the start of a token
//!         - attributes.rs: reads one attribute off a single tag
//!         - dispatch.rs: maps tag names to handlers
//!         - context.rs: questions about a token's siblings and parent
//!         - convert.rs: the per-token state machine
//!         - fragment.rs: real HTML parsing for delegated blocks, and the
//!           `data-raw-html` marker stamped on every element in them
//!         - sanitize.rs: URL cleaning for links and images

pub mod attributes;
pub mod context;
pub mod convert;
pub mod dispatch;
pub mod fragment;
pub mod grammar;
pub mod sanitize;
