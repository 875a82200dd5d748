//! Storage Keys
//!
//! A checkbox is identified by the page it lives on and its position
//! among all task checkboxes of that page.

use std::fmt;

/// Separator between page path and index
pub const DEFAULT_SEPARATOR: &str = "::";

/// Rendered storage key, e.g. `/guide/setup::2`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Build the key for the checkbox at `index` (zero-based, document order).
    /// The path is used verbatim.
    pub fn new(path: &str, separator: &str, index: usize) -> Self {
        Self(format!("{}{}{}", path, separator, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
