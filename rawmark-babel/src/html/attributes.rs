//! Attribute extraction from raw tag text.

use crate::error::ConvertError;
use crate::html::fragment::FragmentParser;

/// Reads `name` off the first element of `raw_tag`, or `""` when the
/// attribute (or the element) is absent.
///
/// The tag text is parsed as a one-element fragment, so attribute decoding
/// (entities, quoting) is whatever the parser does.
pub fn extract_attribute(
    parser: &dyn FragmentParser,
    raw_tag: &str,
    name: &str,
) -> Result<String, ConvertError> {
    let fragment = parser.parse(raw_tag)?;
    Ok(fragment
        .first_element()
        .and_then(|element| element.attribute(&name.to_ascii_lowercase()))
        .unwrap_or_default()
        .to_string())
}
