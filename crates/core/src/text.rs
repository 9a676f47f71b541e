//! Bounded text fields and record tokenizing.

use serde::Serialize;

/// Maximum number of characters kept in an item or member name.
pub const NAME_MAX: usize = 30;

/// Maximum number of characters in a member id.
pub const ID_MAX: usize = 8;

/// A display name clipped to [`NAME_MAX`] characters.
///
/// Comparison is case-sensitive and bytewise over the clipped text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Self {
        let clipped = match raw.char_indices().nth(NAME_MAX) {
            Some((end, _)) => &raw[..end],
            None => raw,
        };
        Self(clipped.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ASCII case-insensitive contiguous substring test.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

/// Split the first whitespace-delimited token off `line`.
///
/// Returns the token and everything after it (the separator is left on the
/// remainder). `None` when `line` holds only whitespace.
pub fn split_token(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    Some(line.split_at(end))
}
