//! Item and member reports: predicate + sort order + row shape.

use serde::Serialize;

use fundraiser_catalog::{Catalog, Item, ItemOrder};
use fundraiser_core::{Entity, ItemId, MemberId, Name};
use fundraiser_roster::{Member, MemberOrder, Roster};

use crate::engine::{Report, Tally, Tallied, report};

/// Which items a report lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemFilter {
    All,
    Id(ItemId),
    /// ASCII case-insensitive substring of the name.
    NameContains(String),
    /// Items whose seller list holds this member id.
    SoldBy(String),
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Id(id) => item.id() == id,
            ItemFilter::NameContains(needle) => item.name().contains_ignore_case(needle),
            ItemFilter::SoldBy(member_id) => item.sold_by(member_id),
        }
    }
}

/// Which members a report lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberFilter {
    All,
    Id(String),
    NameContains(String),
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        match self {
            MemberFilter::All => true,
            MemberFilter::Id(id) => member.id() == id.as_str(),
            MemberFilter::NameContains(needle) => member.name().contains_ignore_case(needle),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: Name,
    pub cost: u64,
    pub sold: u64,
    pub revenue: u64,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: *item.id(),
            name: item.name().clone(),
            cost: item.cost(),
            sold: item.sold(),
            revenue: item.revenue(),
        }
    }
}

impl Tallied for ItemRow {
    fn tally(&self) -> Tally {
        Tally {
            quantity: self.sold,
            revenue: self.revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRow {
    pub id: MemberId,
    pub name: Name,
    pub sold: u64,
    pub revenue: u64,
}

impl MemberRow {
    pub fn new(member: &Member, catalog: &Catalog) -> Self {
        Self {
            id: member.id().clone(),
            name: member.name().clone(),
            sold: member.items_sold(),
            revenue: member.sales_value(catalog),
        }
    }
}

impl Tallied for MemberRow {
    fn tally(&self) -> Tally {
        Tally {
            quantity: self.sold,
            revenue: self.revenue,
        }
    }
}

/// Sort the catalog, then report the items `filter` admits.
pub fn item_report(catalog: &mut Catalog, filter: &ItemFilter, order: ItemOrder) -> Report<ItemRow> {
    catalog.sort_by(order);
    report(catalog.iter(), |item| filter.matches(item), |item| ItemRow::from(*item))
}

/// Sort the roster, then report the members `filter` admits.
///
/// `catalog` supplies the unit costs behind each member's revenue.
pub fn member_report(
    roster: &mut Roster,
    catalog: &Catalog,
    filter: &MemberFilter,
    order: MemberOrder,
) -> Report<MemberRow> {
    roster.sort_by(order, catalog);
    report(
        roster.iter(),
        |member| filter.matches(member),
        |member| MemberRow::new(member, catalog),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundraiser_sales::{Group, RecordSale, read_items, read_members};
    use proptest::prelude::*;
    use std::io::Cursor;

    const ITEMS: &str = "\
4 3 Ballpoint Pen
2 10 Coffee Mug
9 1 Pencil
5 6 Pen Holder
";

    const MEMBERS: &str = "\
m03 Linus Torvalds
m01 Ada Lovelace
m02 Grace Hopper
";

    fn test_group() -> Group {
        let mut catalog = Catalog::new();
        read_items(Cursor::new(ITEMS), "items-test", &mut catalog).unwrap();
        let mut roster = Roster::new();
        read_members(Cursor::new(MEMBERS), "members-test", &mut roster).unwrap();
        Group::new(catalog, roster)
    }

    fn sell(group: &mut Group, member_id: &str, item_id: i64, quantity: u64) {
        group
            .record_sale(RecordSale {
                member_id: member_id.to_string(),
                item_id: ItemId(item_id),
                quantity,
            })
            .unwrap();
    }

    fn with_sales() -> Group {
        let mut group = test_group();
        sell(&mut group, "m01", 4, 10);
        sell(&mut group, "m02", 2, 3);
        sell(&mut group, "m01", 2, 1);
        sell(&mut group, "m03", 9, 7);
        group
    }

    fn item_ids(report: &Report<ItemRow>) -> Vec<i64> {
        report.rows.iter().map(|row| row.id.0).collect()
    }

    fn member_ids(report: &Report<MemberRow>) -> Vec<&str> {
        report.rows.iter().map(|row| row.id.as_str()).collect()
    }

    #[test]
    fn all_items_by_id() {
        let mut group = with_sales();
        let (catalog, _) = group.parts_mut();

        let report = item_report(catalog, &ItemFilter::All, ItemOrder::Id);

        assert_eq!(item_ids(&report), vec![2, 4, 5, 9]);
        assert_eq!(report.rows[0].revenue, 40);
        assert_eq!(
            report.totals,
            Tally {
                quantity: 21,
                revenue: 30 + 40 + 7
            }
        );
    }

    #[test]
    fn all_items_by_name() {
        let mut group = test_group();
        let (catalog, _) = group.parts_mut();

        let report = item_report(catalog, &ItemFilter::All, ItemOrder::Name);

        assert_eq!(item_ids(&report), vec![4, 2, 5, 9]);
    }

    #[test]
    fn name_search_filters_rows_but_not_totals() {
        let mut group = with_sales();
        let (catalog, _) = group.parts_mut();
        let everything = item_report(catalog, &ItemFilter::All, ItemOrder::Id).totals;

        let report = item_report(catalog, &ItemFilter::NameContains("pen".into()), ItemOrder::Id);

        assert_eq!(item_ids(&report), vec![4, 5, 9]);
        assert_eq!(report.totals, everything);
    }

    #[test]
    fn items_sold_by_member() {
        let mut group = with_sales();
        let (catalog, _) = group.parts_mut();

        let report = item_report(catalog, &ItemFilter::SoldBy("m01".into()), ItemOrder::Id);
        assert_eq!(item_ids(&report), vec![2, 4]);

        let nobody = item_report(catalog, &ItemFilter::SoldBy("zz".into()), ItemOrder::Id);
        assert!(nobody.rows.is_empty());
        assert_eq!(nobody.totals.quantity, 21);
    }

    #[test]
    fn item_id_filter() {
        let mut group = test_group();
        let (catalog, _) = group.parts_mut();

        let report = item_report(catalog, &ItemFilter::Id(ItemId(5)), ItemOrder::Id);
        assert_eq!(item_ids(&report), vec![5]);
    }

    #[test]
    fn members_by_id_and_name() {
        let mut group = with_sales();
        let (catalog, roster) = group.parts_mut();

        let by_id = member_report(roster, catalog, &MemberFilter::All, MemberOrder::Id);
        assert_eq!(member_ids(&by_id), vec!["m01", "m02", "m03"]);
        assert_eq!(by_id.rows[0].sold, 11);
        assert_eq!(by_id.rows[0].revenue, 40);

        let by_name = member_report(roster, catalog, &MemberFilter::All, MemberOrder::Name);
        assert_eq!(member_ids(&by_name), vec!["m01", "m02", "m03"]);
    }

    #[test]
    fn top_sellers_ordered_by_revenue() {
        let mut group = with_sales();
        let (catalog, roster) = group.parts_mut();

        let report = member_report(roster, catalog, &MemberFilter::All, MemberOrder::SalesValue);

        assert_eq!(member_ids(&report), vec!["m01", "m02", "m03"]);
        let revenue: Vec<u64> = report.rows.iter().map(|row| row.revenue).collect();
        assert_eq!(revenue, vec![40, 30, 7]);
    }

    #[test]
    fn member_search_and_id_filters() {
        let mut group = with_sales();
        let (catalog, roster) = group.parts_mut();

        let found = member_report(
            roster,
            catalog,
            &MemberFilter::NameContains("HOP".into()),
            MemberOrder::Id,
        );
        assert_eq!(member_ids(&found), vec!["m02"]);
        assert_eq!(found.totals.revenue, 77);

        let exact = member_report(roster, catalog, &MemberFilter::Id("m03".into()), MemberOrder::Id);
        assert_eq!(member_ids(&exact), vec!["m03"]);
    }

    #[test]
    fn member_and_item_grand_totals_agree() {
        let mut group = with_sales();
        let (catalog, roster) = group.parts_mut();

        let items = item_report(catalog, &ItemFilter::All, ItemOrder::Id);
        let members = member_report(roster, catalog, &MemberFilter::All, MemberOrder::Id);

        assert_eq!(items.totals, members.totals);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for any sale sequence, the member and item reports agree
        /// on grand quantity and revenue.
        #[test]
        fn grand_totals_agree_for_any_sales(
            sales in prop::collection::vec((0usize..3, 0usize..4, 0u64..50), 0..30)
        ) {
            let members = ["m01", "m02", "m03"];
            let items = [4i64, 2, 9, 5];
            let mut group = test_group();
            for (m, i, quantity) in sales {
                sell(&mut group, members[m], items[i], quantity);
            }

            let (catalog, roster) = group.parts_mut();
            let item_totals = item_report(catalog, &ItemFilter::All, ItemOrder::Name).totals;
            let member_totals =
                member_report(roster, catalog, &MemberFilter::All, MemberOrder::SalesValue).totals;
            prop_assert_eq!(item_totals, member_totals);
        }
    }
}
