//! Pre-sanitized HTML produced by the chart renderer.

use std::fmt;

/// HTML fragment that templates may emit without escaping.
///
/// Only chart renderers inside this crate can construct a value of this type,
/// so anything reaching a template as `TrustedMarkup` came from a renderer and
/// never from request data. Plain `String` fields are always escaped by the
/// template engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    pub(crate) fn from_renderer(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
