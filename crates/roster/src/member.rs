use serde::Serialize;

use fundraiser_catalog::{Catalog, ItemKey};
use fundraiser_core::{DomainError, DomainResult, Entity, MemberId, Name, split_token};

/// How much of one catalog item a member has sold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SaleLink {
    item: ItemKey,
    quantity: u64,
}

impl SaleLink {
    pub fn item(&self) -> ItemKey {
        self.item
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// A fundraiser participant.
///
/// Holds at most one [`SaleLink`] per item, in order of first sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    id: MemberId,
    name: Name,
    sales: Vec<SaleLink>,
}

impl Member {
    pub fn new(id: MemberId, name: Name) -> Self {
        Self {
            id,
            name,
            sales: Vec::new(),
        }
    }

    /// Parse one member record: `<id> <name...>`.
    pub fn from_record(line: &str) -> DomainResult<Self> {
        let (id, rest) =
            split_token(line).ok_or_else(|| DomainError::validation("missing member id"))?;
        let id = MemberId::new(id)?;

        let name = rest.trim();
        if name.is_empty() {
            return Err(DomainError::validation(format!("member {id} has no name")));
        }

        Ok(Self::new(id, Name::new(name)))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn sales(&self) -> &[SaleLink] {
        &self.sales
    }

    pub fn link_for(&self, item: ItemKey) -> Option<&SaleLink> {
        self.sales.iter().find(|link| link.item == item)
    }

    /// Add `quantity` to this member's link for `item`, creating it on first sale.
    pub fn add_sale(&mut self, item: ItemKey, quantity: u64) {
        match self.sales.iter_mut().find(|link| link.item == item) {
            Some(link) => link.quantity = link.quantity.saturating_add(quantity),
            None => self.sales.push(SaleLink { item, quantity }),
        }
    }

    /// Units sold across all items.
    pub fn items_sold(&self) -> u64 {
        self.sales.iter().map(SaleLink::quantity).sum()
    }

    /// Σ `quantity × cost` over this member's links.
    pub fn sales_value(&self, catalog: &Catalog) -> u64 {
        self.sales
            .iter()
            .filter_map(|link| {
                catalog
                    .get(link.item)
                    .map(|item| link.quantity.saturating_mul(item.cost()))
            })
            .sum()
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
