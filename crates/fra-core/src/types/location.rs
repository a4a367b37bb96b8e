//! Geographic unit records (protected areas, tribal areas).
//!
//! Metrics on a location are precomputed upstream and are authoritative:
//! `fra_progress.coverage` is never recomputed from claim records.

use serde::{Deserialize, Serialize};

use super::identifiers::LocationId;
use super::serde_helpers::{lenient_count, lenient_f64, lenient_points};

/// Kind of geographic unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    NationalPark,
    BiosphereReserve,
    WildlifeSanctuary,
    TigerReserve,
    #[default]
    TribalArea,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: f64,
}

/// Precomputed FRA progress for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FraProgress {
    #[serde(deserialize_with = "lenient_f64")]
    pub coverage: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_claims: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub granted_claims: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub pending_claims: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub rejected_claims: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub households: u64,
    /// "Active" | "Ongoing" | "Pending".
    pub status: Option<String>,
    /// "High" | "Medium" | "Low".
    pub dependency: Option<String>,
    /// "Increasing" | "Stable" | "Decreasing".
    pub population_trend: Option<String>,
}

impl FraProgress {
    /// Claims not accounted for by granted/pending/rejected, i.e. under review.
    pub fn under_review_remainder(&self) -> u64 {
        self.total_claims
            .saturating_sub(self.granted_claims + self.pending_claims + self.rejected_claims)
    }
}

/// Land-use breakdown, in percent of area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LandUse {
    #[serde(deserialize_with = "lenient_f64")]
    pub agricultural_land: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub forest_cover: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub water_bodies: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub homesteads: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DataLayers {
    /// "CNN" | "Random Forest".
    pub classification_model: Option<String>,
    /// "High" | "Moderate" | "Low" | "Stable".
    pub groundwater_level: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub pm_gati_shakti_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskMetrics {
    /// "High" | "Medium" | "Low".
    pub fire_level: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub fire_percentage: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub biodiversity_index: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub endangered_species: f64,
    /// "Excellent" | "Good" | "Stable" | "Moderate" | "Critical".
    pub conservation_status: Option<String>,
}

/// Government-scheme eligibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemeEligibility {
    pub pm_kisan: bool,
    pub mgnrega: bool,
    pub jal_jeevan: bool,
    pub pmay: bool,
}

/// One geographic unit. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    #[serde(default)]
    pub id: LocationId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: LocationKind,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub villages: Vec<String>,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default, deserialize_with = "lenient_points")]
    pub boundary: Vec<[f64; 2]>,
    #[serde(default)]
    pub tribal_groups: Vec<String>,
    #[serde(default)]
    pub fra_progress: FraProgress,
    #[serde(default)]
    pub land_use: LandUse,
    #[serde(default)]
    pub data_layers: DataLayers,
    #[serde(default)]
    pub risk: RiskMetrics,
    #[serde(default)]
    pub schemes: SchemeEligibility,
}

impl LocationRecord {
    /// Minimal record used by tests and in-memory sources.
    pub fn new(id: impl Into<String>, state: &str, district: &str) -> Self {
        Self {
            id: LocationId::new(id),
            state: state.to_string(),
            district: district.to_string(),
            ..Self::default()
        }
    }

    pub fn with_villages(mut self, villages: &[&str]) -> Self {
        self.villages = villages.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_tribal_groups(mut self, groups: &[&str]) -> Self {
        self.tribal_groups = groups.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn has_village(&self, village: &str) -> bool {
        self.villages.iter().any(|v| v == village)
    }

    pub fn has_tribal_group(&self, group: &str) -> bool {
        self.tribal_groups.iter().any(|g| g == group)
    }
}
