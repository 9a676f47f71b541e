//! Filter-then-report traversal.

use core::ops::AddAssign;

use serde::Serialize;

/// Quantity and revenue accumulated over a set of records.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub quantity: u64,
    pub revenue: u64,
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.quantity = self.quantity.saturating_add(rhs.quantity);
        self.revenue = self.revenue.saturating_add(rhs.revenue);
    }
}

/// A report row that contributes to the grand totals.
pub trait Tallied {
    fn tally(&self) -> Tally;
}

/// Matching rows in traversal order, plus totals over **every** record
/// traversed (matching or not).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<R> {
    pub rows: Vec<R>,
    pub totals: Tally,
}

/// Traverse `records` once, in the order given.
///
/// Every record is turned into a row and added to the totals; only rows whose
/// record satisfies `predicate` are kept.
pub fn report<T, R, I, P, F>(records: I, predicate: P, to_row: F) -> Report<R>
where
    I: IntoIterator<Item = T>,
    P: Fn(&T) -> bool,
    F: Fn(&T) -> R,
    R: Tallied,
{
    let mut rows = Vec::new();
    let mut totals = Tally::default();

    for record in records {
        let row = to_row(&record);
        totals += row.tally();
        if predicate(&record) {
            rows.push(row);
        }
    }

    Report { rows, totals }
}
