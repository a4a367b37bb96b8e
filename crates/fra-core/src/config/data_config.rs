//! Fixture data configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the static fixtures live and how many parsed files to keep cached.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Claims fixture path. Default: `data/claims.json`.
    pub claims_path: Option<PathBuf>,
    /// Locations fixture path. Default: `data/locations.json`.
    pub locations_path: Option<PathBuf>,
    /// Maximum parsed fixture files held in the cache. Default: 8.
    pub cache_capacity: Option<u64>,
}

impl DataConfig {
    /// Returns the effective claims path.
    pub fn effective_claims_path(&self) -> PathBuf {
        self.claims_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CLAIMS_PATH))
    }

    /// Returns the effective locations path.
    pub fn effective_locations_path(&self) -> PathBuf {
        self.locations_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_LOCATIONS_PATH))
    }

    /// Returns the effective cache capacity, defaulting to 8.
    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity
            .unwrap_or(constants::DEFAULT_CACHE_CAPACITY)
    }
}
