use core::cmp::Ordering;

use serde::Serialize;

use fundraiser_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::Item;

/// Stable key of a catalog slot.
///
/// Keys are handed out by [`Catalog::add`] and stay valid across sorts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemKey(usize);

/// Sort orders available for the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ItemOrder {
    /// Numeric id, ascending.
    Id,
    /// Case-sensitive bytewise name, ascending.
    Name,
}

impl ItemOrder {
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            ItemOrder::Id => a.id().cmp(b.id()),
            ItemOrder::Name => a.name().cmp(b.name()),
        }
    }
}

/// Owning collection of items.
///
/// Slots are append-only; sorting only rearranges the iteration order, so an
/// [`ItemKey`] held by a member keeps pointing at the same item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    slots: Vec<Item>,
    order: Vec<ItemKey>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Duplicate ids are kept as distinct slots.
    pub fn add(&mut self, item: Item) -> ItemKey {
        let key = ItemKey(self.slots.len());
        self.slots.push(item);
        self.order.push(key);
        key
    }

    /// First item, in current iteration order, whose id matches.
    ///
    /// With duplicate ids the answer depends on the most recent sort.
    pub fn find_by_id(&self, id: ItemId) -> DomainResult<ItemKey> {
        self.order
            .iter()
            .copied()
            .find(|key| self.slots[key.0].id() == &id)
            .ok_or_else(DomainError::not_found)
    }

    pub fn get(&self, key: ItemKey) -> Option<&Item> {
        self.slots.get(key.0)
    }

    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut Item> {
        self.slots.get_mut(key.0)
    }

    /// Items in current iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.order.iter().map(|key| &self.slots[key.0])
    }

    /// Keys in current iteration order.
    pub fn keys(&self) -> impl Iterator<Item = ItemKey> + '_ {
        self.order.iter().copied()
    }

    pub fn sort_by(&mut self, order: ItemOrder) {
        let slots = &self.slots;
        self.order
            .sort_by(|a, b| order.compare(&slots[a.0], &slots[b.0]));
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
