use criterion::{criterion_group, criterion_main, Criterion};

use fra_analysis::claims::{aggregate, resolve_hierarchy};
use fra_analysis::locations::{aggregate_location_stats, filter_locations};
use fra_core::types::{ClaimRecord, ClaimStatus, FilterState, HierarchyFilter, LocationRecord};

const STATES: [&str; 5] = ["Odisha", "Assam", "Madhya Pradesh", "Jharkhand", "Telangana"];

/// 20K claims spread over 5 states × 10 districts × 8 blocks × 5 villages.
fn build_claims() -> Vec<ClaimRecord> {
    (0..20_000)
        .map(|i| {
            let status = match i % 4 {
                0 => ClaimStatus::Granted,
                1 => ClaimStatus::Pending,
                2 => ClaimStatus::UnderReview,
                _ => ClaimStatus::Rejected,
            };
            ClaimRecord::new(format!("c{i}"), status)
                .located(
                    STATES[i % 5],
                    &format!("D{}", i % 10),
                    &format!("B{}", i % 8),
                    &format!("V{}", i % 5),
                )
                .with_households((i % 13) as u64)
        })
        .collect()
}

fn build_locations() -> Vec<LocationRecord> {
    (0..2_000)
        .map(|i| {
            let village = format!("V{}", i % 40);
            let district = format!("D{}", i % 10);
            let mut loc = LocationRecord::new(format!("l{i}"), STATES[i % 5], &district)
                .with_villages(&[village.as_str()])
                .with_tribal_groups(&["Santhal", "Gond"]);
            loc.fra_progress.coverage = (i % 100) as f64;
            loc
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let claims = build_claims();
    c.bench_function("aggregate_20k_claims", |b| {
        b.iter(|| aggregate(&claims));
    });
}

fn bench_resolve(c: &mut Criterion) {
    let claims = build_claims();
    let national = HierarchyFilter::default();
    let district = HierarchyFilter::state("Odisha").with_district("D0");

    c.bench_function("resolve_national_20k_claims", |b| {
        b.iter(|| resolve_hierarchy(&claims, &national));
    });
    c.bench_function("resolve_district_20k_claims", |b| {
        b.iter(|| resolve_hierarchy(&claims, &district));
    });
}

fn bench_locations(c: &mut Criterion) {
    let locations = build_locations();
    let filters = FilterState {
        state: "Assam".into(),
        tribal_group: "Gond".into(),
        ..Default::default()
    };

    c.bench_function("filter_2k_locations", |b| {
        b.iter(|| filter_locations(&locations, &filters));
    });
    c.bench_function("location_stats_2k", |b| {
        b.iter(|| aggregate_location_stats(&locations));
    });
}

criterion_group!(benches, bench_aggregate, bench_resolve, bench_locations);
criterion_main!(benches);
