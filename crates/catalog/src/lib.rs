//! Catalog domain module.
//!
//! Owns every sellable [`Item`] of the fundraiser. Other modules refer to items
//! through [`ItemKey`]s and never hold copies.

pub mod catalog;
pub mod item;

pub use catalog::{Catalog, ItemKey, ItemOrder};
pub use item::Item;
