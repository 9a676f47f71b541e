use core::cmp::Reverse;

use fundraiser_catalog::Catalog;
use fundraiser_core::{DomainError, DomainResult, Entity};

use crate::member::Member;

/// Sort orders available for the roster.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MemberOrder {
    /// Member id, ascending.
    Id,
    /// Case-sensitive bytewise name, ascending.
    Name,
    /// Total sales value descending, ties broken by id ascending.
    SalesValue,
}

/// Owning collection of members with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member, rejecting an id that is already present.
    pub fn add(&mut self, member: Member) -> DomainResult<usize> {
        if self.members.iter().any(|m| m.id() == member.id()) {
            return Err(DomainError::DuplicateId(member.id().to_string()));
        }
        self.members.push(member);
        Ok(self.members.len() - 1)
    }

    /// Index of the member with this id in current order.
    ///
    /// Scans the whole roster and keeps the last match.
    pub fn find_by_id(&self, id: &str) -> DomainResult<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.id() == id)
            .map(|(index, _)| index)
            .last()
            .ok_or_else(DomainError::not_found)
    }

    pub fn get(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Member> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> + '_ {
        self.members.iter()
    }

    /// Sort in place. `catalog` supplies unit costs for [`MemberOrder::SalesValue`].
    pub fn sort_by(&mut self, order: MemberOrder, catalog: &Catalog) {
        match order {
            MemberOrder::Id => self.members.sort_by(|a, b| a.id().cmp(b.id())),
            MemberOrder::Name => self.members.sort_by(|a, b| a.name().cmp(b.name())),
            MemberOrder::SalesValue => self
                .members
                .sort_by_cached_key(|m| (Reverse(m.sales_value(catalog)), m.id().clone())),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
