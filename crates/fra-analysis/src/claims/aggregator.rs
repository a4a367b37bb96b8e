//! Claim status aggregation.
//!
//! Reduces any subset of claim records to a `ProgressSummary`. The
//! geography-scoped wrappers filter by exact key equality and delegate to
//! `aggregate`. A record missing a key never matches a filter on that key.

use fra_core::tracing::metrics;
use fra_core::types::{ClaimRecord, ClaimStatus, ProgressSummary};

use crate::stats::percentage;

/// Reduce claims to status counts, coverage and household total.
///
/// Total over all inputs. `total_claims` counts every record, including
/// those whose status is unrecognized; those records land in no bucket.
/// Coverage is the granted share rounded to a whole percent, 0 when empty.
pub fn aggregate<'a, I>(claims: I) -> ProgressSummary
where
    I: IntoIterator<Item = &'a ClaimRecord>,
{
    let mut summary = ProgressSummary::default();
    for claim in claims {
        summary.total_claims += 1;
        summary.households += claim.households;
        match claim.status {
            ClaimStatus::Granted => summary.granted_claims += 1,
            ClaimStatus::Pending => summary.pending_claims += 1,
            ClaimStatus::UnderReview => summary.under_review_claims += 1,
            ClaimStatus::Rejected => summary.rejected_claims += 1,
            ClaimStatus::Unrecognized(_) => {}
        }
    }
    summary.coverage = percentage(summary.granted_claims, summary.total_claims);
    summary
}

/// Count of records whose status is outside the four known values.
pub fn unrecognized_claims<'a, I>(claims: I) -> usize
where
    I: IntoIterator<Item = &'a ClaimRecord>,
{
    claims
        .into_iter()
        .filter(|c| !c.status.is_recognized())
        .count()
}

/// Conjunction of exact-match geography predicates.
///
/// `None` means the key is not constrained. A constrained key only matches
/// records that carry exactly that value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClaimScope<'a> {
    pub state: Option<&'a str>,
    pub district: Option<&'a str>,
    pub block: Option<&'a str>,
    pub village: Option<&'a str>,
}

impl<'a> ClaimScope<'a> {
    pub fn national() -> Self {
        Self::default()
    }

    pub fn state(state: &'a str) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn district(state: &'a str, district: &'a str) -> Self {
        Self {
            district: Some(district),
            ..Self::state(state)
        }
    }

    pub fn block(state: &'a str, district: &'a str, block: &'a str) -> Self {
        Self {
            block: Some(block),
            ..Self::district(state, district)
        }
    }

    pub fn village(state: &'a str, district: &'a str, block: &'a str, village: &'a str) -> Self {
        Self {
            village: Some(village),
            ..Self::block(state, district, block)
        }
    }

    pub fn matches(&self, claim: &ClaimRecord) -> bool {
        key_matches(self.state, claim.state())
            && key_matches(self.district, claim.district())
            && key_matches(self.block, claim.block())
            && key_matches(self.village, claim.village())
    }
}

fn key_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual == Some(w),
    }
}

/// Progress over the claims inside `scope`.
pub fn aggregate_scope(claims: &[ClaimRecord], scope: &ClaimScope<'_>) -> ProgressSummary {
    let span = tracing::trace_span!("aggregate_scope", claims_aggregated = tracing::field::Empty);
    let _guard = span.enter();

    let summary = aggregate(claims.iter().filter(|c| scope.matches(c)));
    span.record(metrics::CLAIMS_AGGREGATED, summary.total_claims);
    summary
}

/// Progress over every claim in `state`.
pub fn aggregate_state_progress(claims: &[ClaimRecord], state: &str) -> ProgressSummary {
    aggregate_scope(claims, &ClaimScope::state(state))
}

/// Progress over every claim in (`state`, `district`).
pub fn aggregate_district_progress(
    claims: &[ClaimRecord],
    state: &str,
    district: &str,
) -> ProgressSummary {
    aggregate_scope(claims, &ClaimScope::district(state, district))
}

/// Progress over every claim in (`state`, `district`, `block`).
pub fn aggregate_block_progress(
    claims: &[ClaimRecord],
    state: &str,
    district: &str,
    block: &str,
) -> ProgressSummary {
    aggregate_scope(claims, &ClaimScope::block(state, district, block))
}

/// Progress over every claim in (`state`, `district`, `block`, `village`).
pub fn aggregate_village_progress(
    claims: &[ClaimRecord],
    state: &str,
    district: &str,
    block: &str,
    village: &str,
) -> ProgressSummary {
    aggregate_scope(claims, &ClaimScope::village(state, district, block, village))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(state: &str, status: ClaimStatus) -> ClaimRecord {
        let mut c = ClaimRecord::new(format!("{state}-{status}"), status);
        c.state = Some(state.to_string());
        c
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let summary = aggregate(&[] as &[ClaimRecord]);
        assert_eq!(summary, ProgressSummary::default());
        assert_eq!(summary.coverage, 0);
    }

    #[test]
    fn test_state_example() {
        let claims = vec![
            claim("MP", ClaimStatus::Granted),
            claim("MP", ClaimStatus::Pending),
            claim("MP", ClaimStatus::Rejected),
        ];
        let summary = aggregate_state_progress(&claims, "MP");
        assert_eq!(summary.total_claims, 3);
        assert_eq!(summary.granted_claims, 1);
        assert_eq!(summary.pending_claims, 1);
        assert_eq!(summary.rejected_claims, 1);
        assert_eq!(summary.under_review_claims, 0);
        assert_eq!(summary.coverage, 33);
        assert_eq!(summary.households, 0);
    }

    #[test]
    fn test_unrecognized_status_counts_in_total_only() {
        let claims = vec![
            claim("MP", ClaimStatus::Granted),
            claim("MP", ClaimStatus::Unrecognized("Approved".into())),
            claim("MP", ClaimStatus::default()),
        ];
        let summary = aggregate(&claims);
        assert_eq!(summary.total_claims, 3);
        assert_eq!(summary.categorized_claims(), 1);
        assert_eq!(summary.coverage, 33);
        assert_eq!(unrecognized_claims(&claims), 2);
    }

    #[test]
    fn test_households_sum() {
        let claims = vec![
            claim("MP", ClaimStatus::Granted).with_households(4),
            claim("MP", ClaimStatus::Pending).with_households(0),
            claim("MP", ClaimStatus::UnderReview).with_households(7),
        ];
        let summary = aggregate(&claims);
        assert_eq!(summary.households, 11);
        assert_eq!(summary.under_review_claims, 1);
    }

    #[test]
    fn test_missing_key_never_matches() {
        let mut orphan = ClaimRecord::new("orphan", ClaimStatus::Granted);
        orphan.state = Some("Odisha".into());
        let located = ClaimRecord::new("ok", ClaimStatus::Pending)
            .located("Odisha", "Khordha", "Bhubaneswar", "Chandaka");
        let claims = vec![orphan, located];

        assert_eq!(aggregate_state_progress(&claims, "Odisha").total_claims, 2);
        assert_eq!(
            aggregate_district_progress(&claims, "Odisha", "Khordha").total_claims,
            1
        );
    }

    #[test]
    fn test_scoped_wrappers_are_conjunctions() {
        let claims = vec![
            ClaimRecord::new("a", ClaimStatus::Granted).located("Odisha", "Khordha", "B1", "V1"),
            ClaimRecord::new("b", ClaimStatus::Granted).located("Odisha", "Khordha", "B2", "V1"),
            ClaimRecord::new("c", ClaimStatus::Pending).located("Odisha", "Puri", "B1", "V1"),
            ClaimRecord::new("d", ClaimStatus::Pending).located("Assam", "Khordha", "B1", "V1"),
        ];
        assert_eq!(aggregate_block_progress(&claims, "Odisha", "Khordha", "B1").total_claims, 1);
        assert_eq!(
            aggregate_village_progress(&claims, "Odisha", "Khordha", "B2", "V1").total_claims,
            1
        );
        assert_eq!(aggregate_district_progress(&claims, "Odisha", "Khordha").coverage, 100);
        assert_eq!(aggregate_state_progress(&claims, "Nowhere"), ProgressSummary::default());
    }
}
