//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of records and commands.
/// File access and terminal concerns belong to the loader and the app.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed record or command).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure, too long).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A member id is already present in the roster.
    #[error("duplicate member id: {0}")]
    DuplicateId(String),

    /// A sale named a member that is not on the roster.
    #[error("unknown member: {0}")]
    UnknownMember(String),

    /// A sale named an item that is not in the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// A lookup found nothing.
    #[error("not found")]
    NotFound,

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
