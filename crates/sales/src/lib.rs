//! Sales domain module.
//!
//! The [`Group`] aggregate ties the catalog and roster together and records
//! sales against both; [`load`] builds a group from the item and member files.

pub mod group;
pub mod load;

pub use group::{Group, GroupCommand, GroupEvent, RecordSale, SaleRecorded};
pub use load::{LoadError, load_group, read_items, read_members};
