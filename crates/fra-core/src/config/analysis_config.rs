//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the aggregation and roll-up subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Name given to the national roll-up. Default: "All India".
    pub national_label: Option<String>,
    /// Emit a warning per malformed claim record. Default: true.
    pub warn_on_malformed: Option<bool>,
}

impl AnalysisConfig {
    /// Returns the effective national label.
    pub fn effective_national_label(&self) -> &str {
        self.national_label
            .as_deref()
            .unwrap_or(constants::DEFAULT_NATIONAL_LABEL)
    }

    /// Returns whether malformed records are reported, defaulting to true.
    pub fn effective_warn_on_malformed(&self) -> bool {
        self.warn_on_malformed.unwrap_or(true)
    }
}
