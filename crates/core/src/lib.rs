//! `fundraiser-core`: domain building blocks shared by every fundraiser crate.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod text;

pub use aggregate::Aggregate;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, MemberId};
pub use text::{ID_MAX, NAME_MAX, Name, split_token};
