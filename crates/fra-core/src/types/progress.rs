//! Computed progress summaries.

use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_count, lenient_f64};

/// Claim progress for one region. Computed per call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressSummary {
    pub total_claims: u64,
    pub granted_claims: u64,
    pub pending_claims: u64,
    pub rejected_claims: u64,
    pub under_review_claims: u64,
    /// Granted share of all claims, rounded to a whole percent.
    pub coverage: u32,
    pub households: u64,
}

impl ProgressSummary {
    /// Sum of the four known status buckets.
    pub fn categorized_claims(&self) -> u64 {
        self.granted_claims + self.pending_claims + self.rejected_claims + self.under_review_claims
    }
}

/// A precomputed per-region summary as shipped in the claims fixture
/// (`progressSummary.byState` / `byDistrict`). Its coverage is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub total_claims: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub granted_claims: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub pending_claims: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub rejected_claims: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub coverage: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub households: u64,
}
