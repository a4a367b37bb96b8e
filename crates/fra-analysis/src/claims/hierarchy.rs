//! Hierarchical roll-up: national → state → district → block → village.
//!
//! The most specific level whose full ancestor chain is present in the
//! filter wins. A village without its block, district and state does not
//! select the village level; resolution falls through to the first level
//! that is fully specified.
//!
//! Child regions are bucketed in one pass over the parent's claims. Buckets
//! are keyed in a `BTreeMap`, which dedups by exact equality and orders by
//! byte value, so repeated calls return identical child order.

use fra_core::config::AnalysisConfig;
use fra_core::constants::DEFAULT_NATIONAL_LABEL;
use fra_core::tracing::metrics;
use fra_core::traits::ClaimSource;
use fra_core::types::collections::{BTreeMap, BTreeSet};
use fra_core::types::{ClaimRecord, FilterState, HierarchyFilter};

use super::aggregator::{aggregate, aggregate_scope, ClaimScope};
use super::diagnostics::inspect_claims;
use super::types::{HierarchyLevel, RegionProgress};

/// Resolve `filter` against `claims`, naming the national level "All India".
pub fn resolve_hierarchy(claims: &[ClaimRecord], filter: &HierarchyFilter) -> RegionProgress {
    resolve_hierarchy_with_label(claims, filter, DEFAULT_NATIONAL_LABEL)
}

/// Resolve `filter` against `claims` with a caller-chosen national label.
pub fn resolve_hierarchy_with_label(
    claims: &[ClaimRecord],
    filter: &HierarchyFilter,
    national_label: &str,
) -> RegionProgress {
    let span = tracing::debug_span!(
        "resolve_hierarchy",
        hierarchy_level = tracing::field::Empty,
        child_regions = tracing::field::Empty,
    );
    let _guard = span.enter();

    let chain = (
        filter.state_value(),
        filter.district_value(),
        filter.block_value(),
        filter.village_value(),
    );

    let result = match chain {
        (Some(state), Some(district), Some(block), Some(village)) => RegionProgress::leaf(
            HierarchyLevel::Village,
            village,
            aggregate_scope(claims, &ClaimScope::village(state, district, block, village)),
        ),
        (Some(state), Some(district), Some(block), _) => RegionProgress {
            level: HierarchyLevel::Block,
            name: block.to_string(),
            data: aggregate_scope(claims, &ClaimScope::block(state, district, block)),
            children: Some(village_progress_list(claims, state, district, block)),
        },
        (Some(state), Some(district), _, _) => RegionProgress {
            level: HierarchyLevel::District,
            name: district.to_string(),
            data: aggregate_scope(claims, &ClaimScope::district(state, district)),
            children: Some(block_progress_list(claims, state, district)),
        },
        (Some(state), _, _, _) => RegionProgress {
            level: HierarchyLevel::State,
            name: state.to_string(),
            data: aggregate_scope(claims, &ClaimScope::state(state)),
            children: Some(district_progress_list(claims, state)),
        },
        _ => RegionProgress {
            level: HierarchyLevel::National,
            name: national_label.to_string(),
            data: aggregate(claims),
            children: Some(state_progress_list(claims)),
        },
    };

    span.record(metrics::HIERARCHY_LEVEL, result.level.as_str());
    span.record(metrics::CHILD_REGIONS, result.child_rows().len());
    tracing::debug!(hierarchy_level = %result.level, region = %result.name, "resolved hierarchy");
    result
}

/// One row per distinct state.
pub fn state_progress_list(claims: &[ClaimRecord]) -> Vec<RegionProgress> {
    child_rows(
        HierarchyLevel::State,
        group_by(claims, &ClaimScope::national(), ClaimRecord::state),
    )
}

/// One row per distinct district in `state`.
pub fn district_progress_list(claims: &[ClaimRecord], state: &str) -> Vec<RegionProgress> {
    child_rows(
        HierarchyLevel::District,
        group_by(claims, &ClaimScope::state(state), ClaimRecord::district),
    )
}

/// One row per distinct block in (`state`, `district`).
pub fn block_progress_list(
    claims: &[ClaimRecord],
    state: &str,
    district: &str,
) -> Vec<RegionProgress> {
    child_rows(
        HierarchyLevel::Block,
        group_by(claims, &ClaimScope::district(state, district), ClaimRecord::block),
    )
}

/// One row per distinct village in (`state`, `district`, `block`).
pub fn village_progress_list(
    claims: &[ClaimRecord],
    state: &str,
    district: &str,
    block: &str,
) -> Vec<RegionProgress> {
    child_rows(
        HierarchyLevel::Village,
        group_by(
            claims,
            &ClaimScope::block(state, district, block),
            ClaimRecord::village,
        ),
    )
}

/// Distinct states present in the claims, sorted.
pub fn states_in_claims(claims: &[ClaimRecord]) -> Vec<String> {
    distinct(claims, &ClaimScope::national(), ClaimRecord::state)
}

/// Distinct districts of `state`, sorted.
pub fn districts_for_state_claims(claims: &[ClaimRecord], state: &str) -> Vec<String> {
    distinct(claims, &ClaimScope::state(state), ClaimRecord::district)
}

/// Distinct blocks of (`state`, `district`), sorted.
pub fn blocks_for_district(claims: &[ClaimRecord], state: &str, district: &str) -> Vec<String> {
    distinct(claims, &ClaimScope::district(state, district), ClaimRecord::block)
}

/// Distinct villages of (`state`, `district`, `block`), sorted.
pub fn villages_for_block(
    claims: &[ClaimRecord],
    state: &str,
    district: &str,
    block: &str,
) -> Vec<String> {
    distinct(
        claims,
        &ClaimScope::block(state, district, block),
        ClaimRecord::village,
    )
}

/// Bucket the claims inside `scope` by a child key. Records without the
/// key, or with an empty one, have no child to land in and are skipped.
fn group_by<'c, F>(
    claims: &'c [ClaimRecord],
    scope: &ClaimScope<'_>,
    key: F,
) -> BTreeMap<&'c str, Vec<&'c ClaimRecord>>
where
    F: Fn(&'c ClaimRecord) -> Option<&'c str>,
{
    let mut groups: BTreeMap<&'c str, Vec<&'c ClaimRecord>> = BTreeMap::new();
    for claim in claims {
        if !scope.matches(claim) {
            continue;
        }
        if let Some(k) = key(claim).filter(|k| !k.is_empty()) {
            groups.entry(k).or_default().push(claim);
        }
    }
    groups
}

fn child_rows(
    level: HierarchyLevel,
    groups: BTreeMap<&str, Vec<&ClaimRecord>>,
) -> Vec<RegionProgress> {
    groups
        .into_iter()
        .map(|(name, members)| RegionProgress::leaf(level, name, aggregate(members)))
        .collect()
}

fn distinct<'c, F>(claims: &'c [ClaimRecord], scope: &ClaimScope<'_>, key: F) -> Vec<String>
where
    F: Fn(&'c ClaimRecord) -> Option<&'c str>,
{
    claims
        .iter()
        .filter(|c| scope.matches(c))
        .filter_map(key)
        .filter(|k| !k.is_empty())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Resolver bound to an injected claim source.
///
/// Construct once per session; malformed records are reported at
/// construction rather than on every filter change.
pub struct HierarchyResolver<'s, S: ClaimSource + ?Sized> {
    source: &'s S,
    national_label: String,
}

impl<'s, S: ClaimSource + ?Sized> HierarchyResolver<'s, S> {
    pub fn new(source: &'s S, config: &AnalysisConfig) -> Self {
        if config.effective_warn_on_malformed() {
            inspect_claims(source.claims()).log();
        }
        Self {
            source,
            national_label: config.effective_national_label().to_string(),
        }
    }

    pub fn with_defaults(source: &'s S) -> Self {
        Self::new(source, &AnalysisConfig::default())
    }

    pub fn resolve(&self, filter: &HierarchyFilter) -> RegionProgress {
        resolve_hierarchy_with_label(self.source.claims(), filter, &self.national_label)
    }

    /// Resolve the sidebar filter (no block selector, tribal group ignored).
    pub fn resolve_filters(&self, filters: &FilterState) -> RegionProgress {
        self.resolve(&filters.hierarchy_filter())
    }

    pub fn national_label(&self) -> &str {
        &self.national_label
    }

    pub fn source(&self) -> &S {
        self.source
    }
}
