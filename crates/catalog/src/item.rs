use serde::Serialize;

use fundraiser_core::{DomainError, DomainResult, Entity, ItemId, MemberId, Name, split_token};

/// A sellable catalog entry.
///
/// `sold` always equals the sum of the quantities members have recorded for
/// this item; only the sale ledger moves it, through [`Item::add_sale`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: Name,
    cost: u64,
    sold: u64,
    sellers: Vec<MemberId>,
}

impl Item {
    pub fn new(id: ItemId, name: Name, cost: u64) -> Self {
        Self {
            id,
            name,
            cost,
            sold: 0,
            sellers: Vec::new(),
        }
    }

    /// Parse one item record: `<id> <cost> <name...>`.
    ///
    /// The name is the rest of the line, clipped to the name bound.
    pub fn from_record(line: &str) -> DomainResult<Self> {
        let (id, rest) =
            split_token(line).ok_or_else(|| DomainError::validation("missing item id"))?;
        let id: ItemId = id.parse()?;

        let (cost, rest) =
            split_token(rest).ok_or_else(|| DomainError::validation("missing item cost"))?;
        let cost: u64 = cost
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid item cost: {cost:?}")))?;

        let name = rest.trim();
        if name.is_empty() {
            return Err(DomainError::validation("missing item name"));
        }

        Ok(Self::new(id, Name::new(name), cost))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Cumulative quantity sold across all members.
    pub fn sold(&self) -> u64 {
        self.sold
    }

    /// `sold × cost`.
    pub fn revenue(&self) -> u64 {
        self.sold.saturating_mul(self.cost)
    }

    /// Members who have sold this item, in order of their first sale.
    pub fn sellers(&self) -> &[MemberId] {
        &self.sellers
    }

    pub fn sold_by(&self, member_id: &str) -> bool {
        self.sellers.iter().any(|seller| seller == member_id)
    }

    /// Count `quantity` more units sold by `seller`.
    ///
    /// The seller is remembered once, however many sales they record.
    pub fn add_sale(&mut self, seller: &MemberId, quantity: u64) {
        self.sold = self.sold.saturating_add(quantity);
        if !self.sellers.contains(seller) {
            self.sellers.push(seller.clone());
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
