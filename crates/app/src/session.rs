//! Session: answers one parsed command against the loaded group.

use serde::Serialize;

use fundraiser_catalog::ItemOrder;
use fundraiser_reports::{
    ItemFilter, ItemRow, MemberFilter, MemberRow, Report, item_report, member_report,
};
use fundraiser_roster::MemberOrder;
use fundraiser_sales::{Group, RecordSale, SaleRecorded};

use crate::command::Command;

/// Result of one command, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    Items(Report<ItemRow>),
    Members(Report<MemberRow>),
    SaleRecorded(SaleRecorded),
    /// The command was rejected; nothing changed.
    Invalid(String),
    Quit,
}

/// Owns the group for the lifetime of the process.
#[derive(Debug)]
pub struct Session {
    group: Group,
}

impl Session {
    pub fn new(group: Group) -> Self {
        Self { group }
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Parse and run one command line.
    pub fn execute(&mut self, line: &str) -> Outcome {
        match line.parse::<Command>() {
            Ok(command) => self.dispatch(command),
            Err(err) => {
                tracing::debug!(command = line, error = %err, "invalid command");
                Outcome::Invalid(err.to_string())
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::ListItems => self.items(ItemFilter::All, ItemOrder::Id),
            Command::ListItemNames => self.items(ItemFilter::All, ItemOrder::Name),
            Command::ListMembers => self.members(MemberFilter::All, MemberOrder::Id),
            Command::ListMemberNames => self.members(MemberFilter::All, MemberOrder::Name),
            Command::ListMemberItems(member_id) => {
                self.items(ItemFilter::SoldBy(member_id), ItemOrder::Id)
            }
            Command::ListTopSellers => self.members(MemberFilter::All, MemberOrder::SalesValue),
            Command::SearchItems(needle) => self.items(ItemFilter::NameContains(needle), ItemOrder::Id),
            Command::SearchMembers(needle) => {
                self.members(MemberFilter::NameContains(needle), MemberOrder::Id)
            }
            Command::Sale {
                member_id,
                item_id,
                quantity,
            } => {
                let sale = RecordSale {
                    member_id,
                    item_id,
                    quantity,
                };
                match self.group.record_sale(sale) {
                    Ok(recorded) => Outcome::SaleRecorded(recorded),
                    Err(err) => {
                        tracing::debug!(error = %err, "sale rejected");
                        Outcome::Invalid(err.to_string())
                    }
                }
            }
            Command::Quit => Outcome::Quit,
        }
    }

    fn items(&mut self, filter: ItemFilter, order: ItemOrder) -> Outcome {
        let (catalog, _) = self.group.parts_mut();
        Outcome::Items(item_report(catalog, &filter, order))
    }

    fn members(&mut self, filter: MemberFilter, order: MemberOrder) -> Outcome {
        let (catalog, roster) = self.group.parts_mut();
        Outcome::Members(member_report(roster, catalog, &filter, order))
    }
}
