use serde::Serialize;

use fundraiser_catalog::{Catalog, ItemKey};
use fundraiser_core::{Aggregate, DomainError, DomainResult, Entity, ItemId, MemberId};
use fundraiser_roster::Roster;

/// Command: RecordSale.
///
/// `member_id` is the raw token typed by the user; it is resolved against the
/// roster when the command is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSale {
    pub member_id: String,
    pub item_id: ItemId,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupCommand {
    RecordSale(RecordSale),
}

/// Event: SaleRecorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRecorded {
    pub member_id: MemberId,
    pub item_id: ItemId,
    pub item_key: ItemKey,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GroupEvent {
    SaleRecorded(SaleRecorded),
}

/// Aggregate root: the fundraiser group (catalog + roster).
///
/// Three views of every sale are kept in step: the member's sale link, the
/// item's running total and the item's seller list. All three change inside
/// one `apply`, after `handle` has resolved both ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    catalog: Catalog,
    roster: Roster,
    version: u64,
}

impl Group {
    pub fn new(catalog: Catalog, roster: Roster) -> Self {
        Self {
            catalog,
            roster,
            version: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Borrow both collections mutably (e.g. to sort one while reading the other).
    pub fn parts_mut(&mut self) -> (&mut Catalog, &mut Roster) {
        (&mut self.catalog, &mut self.roster)
    }

    /// Record one sale, or leave the group untouched on error.
    pub fn record_sale(&mut self, sale: RecordSale) -> DomainResult<SaleRecorded> {
        let events = self.execute(&GroupCommand::RecordSale(sale))?;
        debug_assert!(self.check_invariants().is_ok());

        match events.into_iter().next() {
            Some(GroupEvent::SaleRecorded(recorded)) => {
                tracing::debug!(
                    member_id = %recorded.member_id,
                    item_id = %recorded.item_id,
                    quantity = recorded.quantity,
                    version = self.version,
                    "sale recorded"
                );
                Ok(recorded)
            }
            None => Err(DomainError::invariant("sale produced no event")),
        }
    }

    /// Verify the denormalized sale counters agree with each other.
    ///
    /// - every item's `sold` equals the sum of member link quantities for it
    /// - every item's seller list has no repeats and names exactly the members
    ///   holding a link to it
    pub fn check_invariants(&self) -> DomainResult<()> {
        for key in self.catalog.keys() {
            let Some(item) = self.catalog.get(key) else {
                continue;
            };

            let mut linked_total = 0u64;
            let mut linked_members = Vec::new();
            for member in self.roster.iter() {
                if let Some(link) = member.link_for(key) {
                    linked_total = linked_total.saturating_add(link.quantity());
                    linked_members.push(member.id());
                }
            }

            if linked_total != item.sold() {
                return Err(DomainError::invariant(format!(
                    "item {} sold {} but member links total {linked_total}",
                    item.id(),
                    item.sold()
                )));
            }

            let sellers = item.sellers();
            if sellers.len() != linked_members.len()
                || linked_members.iter().any(|id| !sellers.contains(*id))
            {
                return Err(DomainError::invariant(format!(
                    "item {} seller list does not match member links",
                    item.id()
                )));
            }
        }

        for member in self.roster.iter() {
            for (n, link) in member.sales().iter().enumerate() {
                if member.sales()[..n].iter().any(|l| l.item() == link.item()) {
                    return Err(DomainError::invariant(format!(
                        "member {} holds two links for one item",
                        member.id()
                    )));
                }
            }
        }

        Ok(())
    }

    fn handle_record_sale(&self, cmd: &RecordSale) -> Result<Vec<GroupEvent>, DomainError> {
        let member_index = self
            .roster
            .find_by_id(&cmd.member_id)
            .map_err(|_| DomainError::UnknownMember(cmd.member_id.clone()))?;
        let member = self
            .roster
            .get(member_index)
            .ok_or_else(|| DomainError::UnknownMember(cmd.member_id.clone()))?;

        let item_key = self
            .catalog
            .find_by_id(cmd.item_id)
            .map_err(|_| DomainError::UnknownItem(cmd.item_id))?;

        Ok(vec![GroupEvent::SaleRecorded(SaleRecorded {
            member_id: member.id().clone(),
            item_id: cmd.item_id,
            item_key,
            quantity: cmd.quantity,
        })])
    }
}

impl Aggregate for Group {
    type Command = GroupCommand;
    type Event = GroupEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            GroupEvent::SaleRecorded(e) => {
                // Members are located by id: the roster may have been re-sorted
                // since the event was decided. Both targets are resolved before
                // anything changes so the three views never drift apart.
                let member_index = self.roster.find_by_id(e.member_id.as_str()).ok();
                let item_matches = self
                    .catalog
                    .get(e.item_key)
                    .is_some_and(|item| item.id() == &e.item_id);

                let (Some(index), true) = (member_index, item_matches) else {
                    tracing::warn!(
                        member_id = %e.member_id,
                        item_id = %e.item_id,
                        "sale event does not match this group; ignored"
                    );
                    return;
                };

                if let Some(member) = self.roster.get_mut(index) {
                    member.add_sale(e.item_key, e.quantity);
                }
                if let Some(item) = self.catalog.get_mut(e.item_key) {
                    item.add_sale(&e.member_id, e.quantity);
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            GroupCommand::RecordSale(cmd) => self.handle_record_sale(cmd),
        }
    }
}
