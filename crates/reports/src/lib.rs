//! Reporting over the fundraiser collections.
//!
//! A report sorts a collection, walks it once, keeps the rows a filter admits
//! and totals quantity and revenue over everything it walked.

pub mod engine;
pub mod queries;

pub use engine::{Report, Tally, Tallied, report};
pub use queries::{ItemFilter, ItemRow, MemberFilter, MemberRow, item_report, member_report};
