//! Strongly-typed identifiers for items and members.

use core::str::FromStr;
use serde::Serialize;

use crate::error::DomainError;
use crate::text::ID_MAX;

/// Identifier of a catalog item, supplied by the item file.
///
/// Item ids are not required to be unique; they order numerically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| DomainError::invalid_id(format!("ItemId {s:?}: {e}")))
    }
}

/// Identifier of a roster member: one token of at most [`ID_MAX`] characters.
///
/// Ordering is bytewise, so `"a01" < "b01"` and `"B" < "a"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::invalid_id("MemberId cannot be empty"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid_id(format!(
                "MemberId {raw:?} contains whitespace"
            )));
        }
        if raw.chars().count() > ID_MAX {
            return Err(DomainError::invalid_id(format!(
                "MemberId {raw:?} is longer than {ID_MAX} characters"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MemberId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MemberId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl core::fmt::Display for MemberId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for MemberId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
