//! Config field paths.

use owo_colors::OwoColorize;
use std::fmt;

/// Location of a value inside the config document.
///
/// Rendered as dotted keys with bracketed indices, e.g. `nav.zh[1].items`.
/// Built incrementally while walking the raw document:
///
/// ```ignore
/// let path = FieldPath::new("nav").key("zh").index(1).key("items");
/// assert_eq!(path.as_str(), "nav.zh[1].items");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Document root (renders as an empty path).
    #[inline]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Child path for a map key.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Child path for a sequence index.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.0.is_empty() { "<root>" } else { &self.0 };
        write!(f, "{}", format_args!("`{shown}`").bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
