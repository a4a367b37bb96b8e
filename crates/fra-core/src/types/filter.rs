//! Filter shapes handed over by the presentation layer.
//!
//! Empty strings mean "unset" in both filters, matching what the UI's
//! select boxes produce.

use serde::{Deserialize, Serialize};

use super::location::LocationRecord;
use crate::constants::ALL_LOCATIONS_LABEL;

/// Sidebar/map filter. `tribal_group` is independent of the geographic
/// chain: it neither narrows nor is narrowed by the other three.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub state: String,
    pub district: String,
    pub village: String,
    pub tribal_group: String,
}

impl FilterState {
    /// True when any facet is set.
    pub fn has_active_filters(&self) -> bool {
        !(self.state.is_empty()
            && self.district.is_empty()
            && self.village.is_empty()
            && self.tribal_group.is_empty())
    }

    /// Human-readable summary, most specific first:
    /// `"Kohora, Golaghat, Assam, Tribal Group: Mishing"`.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        for part in [&self.village, &self.district, &self.state] {
            if !part.is_empty() {
                parts.push(part.clone());
            }
        }
        if !self.tribal_group.is_empty() {
            parts.push(format!("Tribal Group: {}", self.tribal_group));
        }
        if parts.is_empty() {
            ALL_LOCATIONS_LABEL.to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Filter produced by selecting `location` on the map: its state,
    /// district and first village, keeping the current tribal group.
    pub fn from_location(location: &LocationRecord, tribal_group: &str) -> Self {
        Self {
            state: location.state.clone(),
            district: location.district.clone(),
            village: location.villages.first().cloned().unwrap_or_default(),
            tribal_group: tribal_group.to_string(),
        }
    }

    /// Project onto the claim hierarchy. The sidebar has no block selector,
    /// so `block` is always unset and a village alone never reaches the
    /// village level.
    pub fn hierarchy_filter(&self) -> HierarchyFilter {
        HierarchyFilter {
            state: non_empty(&self.state),
            district: non_empty(&self.district),
            block: None,
            village: non_empty(&self.village),
        }
    }
}

/// Partial geographic filter for the claim hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HierarchyFilter {
    pub state: Option<String>,
    pub district: Option<String>,
    pub block: Option<String>,
    pub village: Option<String>,
}

impl HierarchyFilter {
    pub fn state(state: &str) -> Self {
        Self {
            state: Some(state.to_string()),
            ..Self::default()
        }
    }

    pub fn with_district(mut self, district: &str) -> Self {
        self.district = Some(district.to_string());
        self
    }

    pub fn with_block(mut self, block: &str) -> Self {
        self.block = Some(block.to_string());
        self
    }

    pub fn with_village(mut self, village: &str) -> Self {
        self.village = Some(village.to_string());
        self
    }

    /// Set state, treating `Some("")` as unset.
    pub fn state_value(&self) -> Option<&str> {
        present(&self.state)
    }

    pub fn district_value(&self) -> Option<&str> {
        present(&self.district)
    }

    pub fn block_value(&self) -> Option<&str> {
        present(&self.block)
    }

    pub fn village_value(&self) -> Option<&str> {
        present(&self.village)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
