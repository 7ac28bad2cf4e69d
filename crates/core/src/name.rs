//! Bounded product name.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Display name of a product, at most [`ProductName::MAX_CHARS`] characters.
///
/// Construction never fails. Overlong input is cut down to its first
/// `MAX_CHARS` Unicode scalar values, so a multi-byte character is either kept
/// whole or dropped. One trailing line terminator (`\n` or `\r\n`) is
/// stripped first, which lets the shell pass raw input lines straight through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Maximum number of characters kept.
    pub const MAX_CHARS: usize = 39;

    pub fn new(raw: &str) -> Self {
        let line = raw
            .strip_suffix("\r\n")
            .or_else(|| raw.strip_suffix('\n'))
            .unwrap_or(raw);

        let cut = line
            .char_indices()
            .nth(Self::MAX_CHARS)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len());

        Self(line[..cut].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for ProductName {}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductName {
    fn from(value: String) -> Self {
        // Already within bounds and no terminator: reuse the allocation.
        if value.len() <= Self::MAX_CHARS && !value.ends_with('\n') {
            return Self(value);
        }
        Self::new(&value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}
