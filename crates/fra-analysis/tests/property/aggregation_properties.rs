use fra_analysis::claims::{aggregate, resolve_hierarchy, HierarchyLevel};
use fra_core::types::{ClaimRecord, ClaimStatus, HierarchyFilter};
use proptest::prelude::*;

fn status() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Granted),
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::UnderReview),
        Just(ClaimStatus::Rejected),
        "[A-Z][a-z]{0,8}".prop_map(|s| ClaimStatus::from_label(&s)),
    ]
}

fn claim() -> impl Strategy<Value = ClaimRecord> {
    (
        "[a-z0-9]{1,6}",
        status(),
        prop::sample::select(vec!["Odisha", "Assam", "Madhya Pradesh"]),
        prop::sample::select(vec!["D1", "D2"]),
        prop::sample::select(vec!["B1", "B2"]),
        prop::sample::select(vec!["V1", "V2", "V3"]),
        0u64..50,
    )
        .prop_map(|(id, status, state, district, block, village, households)| {
            ClaimRecord::new(id, status)
                .located(state, district, block, village)
                .with_households(households)
        })
}

proptest! {
    #[test]
    fn known_buckets_never_exceed_total(claims in prop::collection::vec(claim(), 0..60)) {
        let summary = aggregate(&claims);
        prop_assert_eq!(summary.total_claims, claims.len() as u64);
        let unrecognized = claims.iter().filter(|c| !c.status.is_recognized()).count() as u64;
        prop_assert_eq!(summary.categorized_claims() + unrecognized, summary.total_claims);
    }

    #[test]
    fn coverage_is_a_percentage(claims in prop::collection::vec(claim(), 0..60)) {
        let summary = aggregate(&claims);
        prop_assert!(summary.coverage <= 100);
        if summary.total_claims == 0 {
            prop_assert_eq!(summary.coverage, 0);
        }
    }

    #[test]
    fn resolve_is_deterministic(claims in prop::collection::vec(claim(), 0..60)) {
        let filter = HierarchyFilter::state("Odisha").with_district("D1");
        prop_assert_eq!(resolve_hierarchy(&claims, &filter), resolve_hierarchy(&claims, &filter));
    }

    #[test]
    fn orphan_village_resolves_national(claims in prop::collection::vec(claim(), 0..40)) {
        let filter = HierarchyFilter {
            village: Some("V1".into()),
            ..Default::default()
        };
        let result = resolve_hierarchy(&claims, &filter);
        prop_assert_eq!(result.level, HierarchyLevel::National);
        prop_assert_eq!(result.data, aggregate(&claims));
    }

    #[test]
    fn children_partition_located_parent(claims in prop::collection::vec(claim(), 0..60)) {
        let result = resolve_hierarchy(&claims, &HierarchyFilter::state("Assam"));
        prop_assert_eq!(result.level, HierarchyLevel::State);
        let child_total: u64 = result.child_rows().iter().map(|c| c.data.total_claims).sum();
        prop_assert_eq!(child_total, result.data.total_claims);
    }
}
