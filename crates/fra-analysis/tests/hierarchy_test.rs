//! End-to-end resolution through `HierarchyResolver` over an in-memory source.

use fra_analysis::claims::{HierarchyLevel, HierarchyResolver};
use fra_analysis::locations::{filter_locations, normalize_filters};
use fra_core::config::AnalysisConfig;
use fra_core::types::{ClaimRecord, ClaimStatus, FilterState, HierarchyFilter, LocationRecord};

fn claims() -> Vec<ClaimRecord> {
    vec![
        ClaimRecord::new("OD-1", ClaimStatus::Granted)
            .located("Odisha", "Mayurbhanj", "Jashipur", "Gudugudia")
            .with_households(12),
        ClaimRecord::new("OD-2", ClaimStatus::Pending)
            .located("Odisha", "Mayurbhanj", "Jashipur", "Gudugudia")
            .with_households(3),
        ClaimRecord::new("OD-3", ClaimStatus::UnderReview)
            .located("Odisha", "Mayurbhanj", "Karanjia", "Dudhiani")
            .with_households(5),
        ClaimRecord::new("OD-4", ClaimStatus::Rejected)
            .located("Odisha", "Kandhamal", "Phulbani", "Gumagarh"),
        ClaimRecord::new("AS-1", ClaimStatus::Granted)
            .located("Assam", "Golaghat", "Bokakhat", "Kohora")
            .with_households(9),
    ]
}

#[test]
fn national_lists_states_in_order() {
    let source = claims();
    let resolver = HierarchyResolver::with_defaults(&source);
    let result = resolver.resolve(&HierarchyFilter::default());

    assert_eq!(result.level, HierarchyLevel::National);
    assert_eq!(result.name, "All India");
    assert_eq!(result.data.total_claims, 5);
    assert_eq!(result.data.coverage, 40);
    assert_eq!(result.child_names(), vec!["Assam", "Odisha"]);
}

#[test]
fn drill_down_to_village() {
    let source = claims();
    let resolver = HierarchyResolver::with_defaults(&source);

    let district = resolver.resolve(&HierarchyFilter::state("Odisha").with_district("Mayurbhanj"));
    assert_eq!(district.level, HierarchyLevel::District);
    assert_eq!(district.data.total_claims, 3);
    assert_eq!(district.data.under_review_claims, 1);
    assert_eq!(district.child_names(), vec!["Jashipur", "Karanjia"]);

    let block = resolver.resolve(
        &HierarchyFilter::state("Odisha")
            .with_district("Mayurbhanj")
            .with_block("Jashipur"),
    );
    assert_eq!(block.level, HierarchyLevel::Block);
    assert_eq!(block.data.households, 15);
    assert_eq!(block.child_rows().len(), 1);
    assert_eq!(block.child_rows()[0].level, HierarchyLevel::Village);

    let village = resolver.resolve(
        &HierarchyFilter::state("Odisha")
            .with_district("Mayurbhanj")
            .with_block("Jashipur")
            .with_village("Gudugudia"),
    );
    assert_eq!(village.level, HierarchyLevel::Village);
    assert_eq!(village.data.coverage, 50);
    assert!(village.children.is_none());
}

#[test]
fn custom_national_label() {
    let source = claims();
    let config = AnalysisConfig {
        national_label: Some("India".into()),
        ..Default::default()
    };
    let resolver = HierarchyResolver::new(&source, &config);
    assert_eq!(resolver.resolve(&HierarchyFilter::default()).name, "India");
}

#[test]
fn ui_filters_flow_through_normalization() {
    let locations = vec![
        LocationRecord::new("kaziranga", "Assam", "Golaghat")
            .with_villages(&["Kohora", "Kohora East"])
            .with_tribal_groups(&["Mishing", "Karbi"]),
        LocationRecord::new("simlipal", "Odisha", "Mayurbhanj")
            .with_villages(&["Gudugudia"])
            .with_tribal_groups(&["Santhal"]),
    ];
    let stale = FilterState {
        state: "Odisha".into(),
        district: "Golaghat".into(),
        village: "Kohora".into(),
        tribal_group: String::new(),
    };
    let filters = normalize_filters(&stale, &locations);
    assert_eq!(filters.district, "");
    assert_eq!(filter_locations(&locations, &filters).len(), 1);

    let source = claims();
    let resolver = HierarchyResolver::with_defaults(&source);
    let result = resolver.resolve_filters(&filters);
    assert_eq!(result.level, HierarchyLevel::State);
    assert_eq!(result.name, "Odisha");
}
