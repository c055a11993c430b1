//! Recognizer for a single HTML open or close tag at the start of a string.
//!
//! The grammar is permissive about attributes: it accepts malformed but
//! plausible markup and never validates it.
//!
//! ```text
//! TAG_NAME   = [A-Za-z][A-Za-z0-9-]*
//! ATTR_NAME  = [a-zA-Z_:][a-zA-Z0-9:._-]*
//! ATTR_VALUE = unquoted | '...' | "..."
//! ATTRIBUTE  = \s+ ATTR_NAME ( \s* = \s* ATTR_VALUE )?
//! OPEN_TAG   = < TAG_NAME ATTRIBUTE* \s* /? >
//! CLOSE_TAG  = </ TAG_NAME \s* >
//! ```
//!
//! Matching is case-insensitive and anchored at the start of the input; the
//! rest of the input does not have to be consumed.

use once_cell::sync::Lazy;
use regex::Regex;

const TAG_NAME: &str = "[A-Za-z][A-Za-z0-9-]*";
const ATTR_NAME: &str = "[a-zA-Z_:][a-zA-Z0-9:._-]*";
const UNQUOTED_VALUE: &str = "[^\"'=<>`\\x00-\\x20]+";
const SINGLE_QUOTED_VALUE: &str = "'[^']*'";
const DOUBLE_QUOTED_VALUE: &str = "\"[^\"]*\"";

static TAG_AT_START: Lazy<Regex> = Lazy::new(|| {
    let attr_value = format!("(?:{UNQUOTED_VALUE}|{SINGLE_QUOTED_VALUE}|{DOUBLE_QUOTED_VALUE})");
    let attribute = format!("(?:\\s+{ATTR_NAME}(?:\\s*=\\s*{attr_value})?)");
    let open_tag = format!("<({TAG_NAME}){attribute}*\\s*/?>");
    let close_tag = format!("</({TAG_NAME})\\s*>");
    Regex::new(&format!("(?i)^(?:{open_tag}|{close_tag})")).expect("tag grammar is a valid regex")
});

/// One recognized tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTag<'a> {
    pub is_open: bool,
    /// Tag name exactly as written.
    pub name: &'a str,
    /// The matched tag text, from `<` to `>`.
    pub raw_text: &'a str,
}

impl ParsedTag<'_> {
    pub fn name_is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Matches an open or close tag at the start of `text`.
///
/// # Example
///
/// ```ignore
/// let tag = match_tag_at_start("<DIV class=x>rest").unwrap();
/// assert!(tag.is_open);
/// assert_eq!(tag.name, "DIV");
/// ```
pub fn match_tag_at_start(text: &str) -> Option<ParsedTag<'_>> {
    let captures = TAG_AT_START.captures(text)?;
    let raw_text = captures.get(0)?.as_str();
    if let Some(name) = captures.get(1) {
        return Some(ParsedTag {
            is_open: true,
            name: name.as_str(),
            raw_text,
        });
    }
    captures.get(2).map(|name| ParsedTag {
        is_open: false,
        name: name.as_str(),
        raw_text,
    })
}
