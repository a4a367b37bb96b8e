//! Statistics over the precomputed metrics carried by location records.
//!
//! Location metrics are authoritative. Nothing here recomputes coverage from
//! claims; it only averages, sums and takes the mode of what was shipped.

use fra_core::constants::{
    DEFAULT_CLASSIFICATION_MODEL, DEFAULT_CONSERVATION_STATUS, DEFAULT_DEPENDENCY,
    DEFAULT_FIRE_LEVEL, DEFAULT_GROUNDWATER_LEVEL, DEFAULT_POPULATION_TREND,
    DEFAULT_PROGRESS_STATUS,
};
use fra_core::types::{
    DataLayers, FraProgress, LandUse, LocationRecord, ProgressSummary, RegionSummary,
    RiskMetrics, SchemeEligibility,
};
use serde::Serialize;

use crate::stats::{mean, most_common, percentage, round_half_up};

/// Roll-up of a set of locations into one synthetic record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStats {
    pub location_count: usize,
    pub fra_progress: FraProgress,
    pub land_use: LandUse,
    pub risk: RiskMetrics,
    pub data_layers: DataLayers,
    pub schemes: SchemeEligibility,
}

/// Eligibility share for one government scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemeCoverage {
    pub name: &'static str,
    pub eligible: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Combine `locations` into one record, or `None` when there are none.
///
/// Counts and households are summed. Percentages, indexes and scores are
/// averaged and rounded. Labels take the most common value, falling back to
/// a fixed default when no location carries one. A scheme is eligible when
/// strictly more than half the locations are.
pub fn aggregate_location_stats(locations: &[LocationRecord]) -> Option<LocationStats> {
    if locations.is_empty() {
        return None;
    }
    let n = locations.len();
    let avg = |f: fn(&LocationRecord) -> f64| -> f64 {
        round_half_up(mean(locations.iter().map(f).sum(), n))
    };
    let sum = |f: fn(&LocationRecord) -> u64| -> u64 { locations.iter().map(f).sum() };
    let mode = |f: for<'r> fn(&'r LocationRecord) -> Option<&'r str>, default: &str| -> String {
        most_common(locations.iter().filter_map(f))
            .unwrap_or(default)
            .to_string()
    };
    let majority = |f: fn(&LocationRecord) -> bool| -> bool {
        locations.iter().filter(|&l| f(l)).count() * 2 > n
    };

    let fra_progress = FraProgress {
        coverage: avg(|l| l.fra_progress.coverage),
        total_claims: sum(|l| l.fra_progress.total_claims),
        granted_claims: sum(|l| l.fra_progress.granted_claims),
        pending_claims: sum(|l| l.fra_progress.pending_claims),
        rejected_claims: sum(|l| l.fra_progress.rejected_claims),
        households: sum(|l| l.fra_progress.households),
        status: Some(mode(|l| l.fra_progress.status.as_deref(), DEFAULT_PROGRESS_STATUS)),
        dependency: Some(mode(|l| l.fra_progress.dependency.as_deref(), DEFAULT_DEPENDENCY)),
        population_trend: Some(mode(
            |l| l.fra_progress.population_trend.as_deref(),
            DEFAULT_POPULATION_TREND,
        )),
    };

    let land_use = LandUse {
        agricultural_land: avg(|l| l.land_use.agricultural_land),
        forest_cover: avg(|l| l.land_use.forest_cover),
        water_bodies: avg(|l| l.land_use.water_bodies),
        homesteads: avg(|l| l.land_use.homesteads),
    };

    let risk = RiskMetrics {
        fire_level: Some(mode(|l| l.risk.fire_level.as_deref(), DEFAULT_FIRE_LEVEL)),
        fire_percentage: avg(|l| l.risk.fire_percentage),
        biodiversity_index: avg(|l| l.risk.biodiversity_index),
        endangered_species: avg(|l| l.risk.endangered_species),
        conservation_status: Some(mode(
            |l| l.risk.conservation_status.as_deref(),
            DEFAULT_CONSERVATION_STATUS,
        )),
    };

    let data_layers = DataLayers {
        classification_model: Some(mode(
            |l| l.data_layers.classification_model.as_deref(),
            DEFAULT_CLASSIFICATION_MODEL,
        )),
        groundwater_level: Some(mode(
            |l| l.data_layers.groundwater_level.as_deref(),
            DEFAULT_GROUNDWATER_LEVEL,
        )),
        pm_gati_shakti_score: avg(|l| l.data_layers.pm_gati_shakti_score),
    };

    let schemes = SchemeEligibility {
        pm_kisan: majority(|l| l.schemes.pm_kisan),
        mgnrega: majority(|l| l.schemes.mgnrega),
        jal_jeevan: majority(|l| l.schemes.jal_jeevan),
        pmay: majority(|l| l.schemes.pmay),
    };

    tracing::debug!(location_count = n, "aggregated location stats");

    Some(LocationStats {
        location_count: n,
        fra_progress,
        land_use,
        risk,
        data_layers,
        schemes,
    })
}

/// Combine precomputed per-region summaries.
///
/// Counts are summed; coverage is the rounded mean of the shipped coverage
/// values, 0 for empty input. Under-review is whatever the three shipped
/// buckets leave of the total.
pub fn rollup_summaries(summaries: &[RegionSummary]) -> ProgressSummary {
    let mut total = ProgressSummary::default();
    let mut coverage_sum = 0.0;
    for s in summaries {
        total.total_claims += s.total_claims;
        total.granted_claims += s.granted_claims;
        total.pending_claims += s.pending_claims;
        total.rejected_claims += s.rejected_claims;
        total.households += s.households;
        coverage_sum += s.coverage;
    }
    total.under_review_claims = total
        .total_claims
        .saturating_sub(total.granted_claims + total.pending_claims + total.rejected_claims);
    total.coverage = round_half_up(mean(coverage_sum, summaries.len())).clamp(0.0, 100.0) as u32;
    total
}

/// Per-scheme eligibility counts across `locations`.
pub fn scheme_eligibility(locations: &[LocationRecord]) -> Vec<SchemeCoverage> {
    let schemes: [(&'static str, fn(&SchemeEligibility) -> bool); 4] = [
        ("PM-KISAN", |s| s.pm_kisan),
        ("MGNREGA", |s| s.mgnrega),
        ("Jal Jeevan Mission", |s| s.jal_jeevan),
        ("PMAY", |s| s.pmay),
    ];
    let total = locations.len();
    schemes
        .into_iter()
        .map(|(name, flag)| {
            let eligible = locations.iter().filter(|l| flag(&l.schemes)).count();
            SchemeCoverage {
                name,
                eligible,
                total,
                percentage: percentage(eligible as u64, total as u64),
            }
        })
        .collect()
}
