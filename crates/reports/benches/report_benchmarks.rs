use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use fundraiser_catalog::{Catalog, Item, ItemOrder};
use fundraiser_core::{ItemId, MemberId, Name};
use fundraiser_reports::{ItemFilter, MemberFilter, item_report, member_report};
use fundraiser_roster::{Member, MemberOrder, Roster};
use fundraiser_sales::{Group, RecordSale};

fn member_id(n: usize) -> String {
    format!("m{n:05}")
}

/// Group with `items` items, `members` members and one sale per (member, item % 7) pair.
fn seeded_group(items: usize, members: usize) -> Group {
    let mut catalog = Catalog::new();
    for n in 0..items {
        let id = ((n * 7919) % items) as i64;
        catalog.add(Item::new(ItemId(id), Name::new(&format!("Item {n}")), (n % 13) as u64 + 1));
    }

    let mut roster = Roster::new();
    for n in 0..members {
        let id = MemberId::new(&member_id(n)).expect("bench member id");
        roster
            .add(Member::new(id, Name::new(&format!("Member {n}"))))
            .expect("bench member ids are unique");
    }

    let mut group = Group::new(catalog, roster);
    for m in 0..members {
        for i in (0..items).filter(|i| i % 7 == m % 7).take(8) {
            group
                .record_sale(RecordSale {
                    member_id: member_id(m),
                    item_id: ItemId(i as i64),
                    quantity: (m + i) as u64 % 5 + 1,
                })
                .expect("bench sale");
        }
    }
    group
}

fn bench_item_reports(c: &mut Criterion) {
    let mut group_bench = c.benchmark_group("item_report");

    for size in [100usize, 1_000, 10_000] {
        let mut fundraiser = seeded_group(size, 50);
        group_bench.throughput(Throughput::Elements(size as u64));

        group_bench.bench_with_input(BenchmarkId::new("by_name_search", size), &size, |b, _| {
            let (catalog, _) = fundraiser.parts_mut();
            let filter = ItemFilter::NameContains("item 1".to_string());
            b.iter(|| black_box(item_report(catalog, &filter, ItemOrder::Name)));
        });
    }

    group_bench.finish();
}

fn bench_top_sellers(c: &mut Criterion) {
    let mut group_bench = c.benchmark_group("top_sellers");

    for members in [50usize, 500] {
        let mut fundraiser = seeded_group(1_000, members);
        group_bench.throughput(Throughput::Elements(members as u64));

        group_bench.bench_with_input(BenchmarkId::from_parameter(members), &members, |b, _| {
            let (catalog, roster) = fundraiser.parts_mut();
            b.iter(|| {
                black_box(member_report(
                    roster,
                    catalog,
                    &MemberFilter::All,
                    MemberOrder::SalesValue,
                ))
            });
        });
    }

    group_bench.finish();
}

fn bench_record_sale(c: &mut Criterion) {
    let mut fundraiser = seeded_group(1_000, 200);
    let mut n = 0usize;

    c.bench_function("record_sale", |b| {
        b.iter(|| {
            n = (n + 1) % 200;
            let sale = RecordSale {
                member_id: member_id(n),
                item_id: ItemId((n * 31 % 1_000) as i64),
                quantity: 1,
            };
            black_box(fundraiser.record_sale(sale).expect("bench sale"))
        });
    });
}

criterion_group!(benches, bench_item_reports, bench_top_sellers, bench_record_sale);
criterion_main!(benches);
