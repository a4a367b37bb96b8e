//! FixtureStore: the loaded claims and locations for one session.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fra_core::config::{ConfigOverrides, FraConfig};
use fra_core::errors::{DataError, FraError};
use fra_core::traits::{ClaimSource, LocationSource};
use fra_core::types::{ClaimRecord, LocationRecord, RegionSummary};

use crate::cache::FixtureCache;
use crate::fixtures::{ClaimDataset, LocationDataset};

/// Read-only view over both fixtures. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    claims: Arc<ClaimDataset>,
    locations: Arc<LocationDataset>,
}

impl FixtureStore {
    /// Resolve config under `root` and load both fixtures.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, FraError> {
        let config = FraConfig::load(root, overrides)?;
        let cache = FixtureCache::new(config.data.effective_cache_capacity());
        Ok(Self::open_with_cache(root, &config, &cache)?)
    }

    /// Load both fixtures named by `config`. Relative paths are taken
    /// from `root`.
    pub fn open(root: &Path, config: &FraConfig) -> Result<Self, DataError> {
        let cache = FixtureCache::new(config.data.effective_cache_capacity());
        Self::open_with_cache(root, config, &cache)
    }

    /// Like [`FixtureStore::open`], sharing parsed files through `cache`.
    pub fn open_with_cache(
        root: &Path,
        config: &FraConfig,
        cache: &FixtureCache,
    ) -> Result<Self, DataError> {
        let claims_path = resolve(root, config.data.effective_claims_path());
        let locations_path = resolve(root, config.data.effective_locations_path());

        let store = Self {
            claims: cache.claims(&claims_path)?,
            locations: cache.locations(&locations_path)?,
        };
        tracing::info!(
            claims = store.claims.claims.len(),
            locations = store.locations.locations.len(),
            "fixture store opened"
        );
        Ok(store)
    }

    /// Build a store from in-memory records.
    pub fn from_parts(claims: Vec<ClaimRecord>, locations: Vec<LocationRecord>) -> Self {
        Self {
            claims: Arc::new(ClaimDataset {
                claims,
                progress_summary: Default::default(),
            }),
            locations: Arc::new(LocationDataset { locations }),
        }
    }

    pub fn claims_dataset(&self) -> &ClaimDataset {
        &self.claims
    }

    pub fn locations_dataset(&self) -> &LocationDataset {
        &self.locations
    }

    /// Precomputed per-state summaries shipped with the claims fixture.
    pub fn state_summaries(&self) -> &[RegionSummary] {
        &self.claims.progress_summary.by_state
    }

    /// Precomputed per-district summaries shipped with the claims fixture.
    pub fn district_summaries(&self) -> &[RegionSummary] {
        &self.claims.progress_summary.by_district
    }
}

impl ClaimSource for FixtureStore {
    fn claims(&self) -> &[ClaimRecord] {
        &self.claims.claims
    }
}

impl LocationSource for FixtureStore {
    fn locations(&self) -> &[LocationRecord] {
        &self.locations.locations
    }
}

fn resolve(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
