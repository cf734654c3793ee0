//! Config field path.

use std::fmt;

/// Dot/bracket path to a field inside a site config.
///
/// Built incrementally while walking the navigation tree, so every
/// diagnostic points at the exact element that failed.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("theme").key("sidebar").index(1).key("items");
/// assert_eq!(path.as_str(), "theme.sidebar[1].items");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The empty path, naming the document set as a whole.
    #[inline]
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Append a named child field.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Append a sequence index.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
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
        let shown = if self.is_root() { "<root>" } else { self.as_str() };
        write!(f, "`{shown}`")
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
