//! Roster domain module.
//!
//! Owns every fundraiser [`Member`] and the [`SaleLink`]s recording what each
//! member has sold.

pub mod member;
pub mod roster;

pub use member::{Member, SaleLink};
pub use roster::{MemberOrder, Roster};
