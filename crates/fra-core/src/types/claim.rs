//! Forest-rights claim records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::identifiers::{ClaimId, LocationId};
use super::serde_helpers::{lenient_bool, lenient_count, lenient_f64, lenient_points};

/// Processing status of a claim.
///
/// Fixture labels outside the four known values are kept verbatim in
/// `Unrecognized` so the record still counts toward totals; a missing status
/// is `Unrecognized("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClaimStatus {
    Granted,
    Pending,
    UnderReview,
    Rejected,
    Unrecognized(String),
}

impl ClaimStatus {
    /// Parse a fixture label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Granted" => Self::Granted,
            "Pending" => Self::Pending,
            "Under Review" => Self::UnderReview,
            "Rejected" => Self::Rejected,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The fixture label for this status.
    pub fn label(&self) -> &str {
        match self {
            Self::Granted => "Granted",
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::Rejected => "Rejected",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Default for ClaimStatus {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ClaimStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ClaimStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(s)) => Self::from_label(&s),
            Some(serde_json::Value::Null) | None => Self::default(),
            Some(other) => Self::Unrecognized(other.to_string()),
        })
    }
}

/// Individual (IFR) or community (CR) forest rights. Any other label reads
/// as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RightsType {
    #[serde(rename = "IFR")]
    Individual,
    #[serde(rename = "CR")]
    Community,
    #[serde(other)]
    Other,
}

/// One forest-rights claim. Read-only once loaded.
///
/// Geography keys are optional so that a record missing one is never
/// matched by a filter on that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    #[serde(default)]
    pub id: ClaimId,
    #[serde(rename = "type", default)]
    pub rights_type: Option<RightsType>,
    #[serde(default)]
    pub location_id: Option<LocationId>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub claim_number: Option<String>,
    #[serde(default)]
    pub submission_date: Option<String>,
    #[serde(default)]
    pub status: ClaimStatus,
    #[serde(default, deserialize_with = "lenient_count")]
    pub claimants: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub households: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub land_area: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub tribal_group: Option<String>,
    #[serde(default, deserialize_with = "lenient_points")]
    pub boundary: Vec<[f64; 2]>,
    #[serde(rename = "rightsType", default, skip_serializing_if = "Option::is_none")]
    pub rights_type_detail: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub title_issued: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_number: Option<String>,
}

impl ClaimRecord {
    /// Minimal record used by tests and in-memory sources.
    pub fn new(id: impl Into<String>, status: ClaimStatus) -> Self {
        Self {
            id: ClaimId::new(id),
            status,
            ..Self::default()
        }
    }

    /// Builder-style geography setter.
    pub fn located(
        mut self,
        state: &str,
        district: &str,
        block: &str,
        village: &str,
    ) -> Self {
        self.state = Some(state.to_string());
        self.district = Some(district.to_string());
        self.block = Some(block.to_string());
        self.village = Some(village.to_string());
        self
    }

    pub fn with_households(mut self, households: u64) -> Self {
        self.households = households;
        self
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn block(&self) -> Option<&str> {
        self.block.as_deref()
    }

    pub fn village(&self) -> Option<&str> {
        self.village.as_deref()
    }
}
