//! URL sanitizing for `href` and `src` values.
//!
//! Every URL lifted out of raw HTML passes through a [`Sanitizer`] before it
//! reaches the editable tree. The default [`SchemeSanitizer`] keeps relative
//! URLs and absolute URLs with an allowed scheme, and blanks everything else.

use url::Url;

pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, raw: &str) -> String;
}

pub const DEFAULT_ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel", "ftp"];

/// Allow-list sanitizer keyed on the URL scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeSanitizer {
    allowed_schemes: Vec<String>,
}

impl SchemeSanitizer {
    pub fn new<I, S>(allowed_schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_schemes: allowed_schemes
                .into_iter()
                .map(|scheme| scheme.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn allowed_schemes(&self) -> &[String] {
        &self.allowed_schemes
    }
}

impl Default for SchemeSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_SCHEMES)
    }
}

impl Sanitizer for SchemeSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        // Browsers ignore embedded whitespace and control characters when
        // reading a scheme ("java\tscript:").
        let compact: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect();

        match Url::parse(&compact) {
            Ok(url) if !self.allowed_schemes.iter().any(|s| s == url.scheme()) => {
                log::debug!(target: "rawmark.sanitize", "dropping url with scheme {:?}", url.scheme());
                String::new()
            }
            _ => trimmed.to_string(),
        }
    }
}
