//! In-memory cache of parsed fixtures using moka.
//!
//! Keys are canonical paths, so `./data/claims.json` and an absolute path to
//! the same file share one entry. Values are `Arc`s: repeated loads hand out
//! the same parsed dataset.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use fra_core::constants::DEFAULT_CACHE_CAPACITY;
use fra_core::errors::DataError;
use fra_core::tracing::metrics;
use moka::sync::Cache;

use crate::fixtures::{load_claims, load_locations, ClaimDataset, LocationDataset};

/// Parsed-fixture cache, one moka cache per fixture kind.
pub struct FixtureCache {
    claims: Cache<PathBuf, Arc<ClaimDataset>>,
    locations: Cache<PathBuf, Arc<LocationDataset>>,
}

impl FixtureCache {
    /// Create a cache holding at most `max_entries` files of each kind.
    pub fn new(max_entries: u64) -> Self {
        Self {
            claims: Cache::builder().max_capacity(max_entries).build(),
            locations: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Claims fixture at `path`, parsed at most once while cached.
    pub fn claims(&self, path: &Path) -> Result<Arc<ClaimDataset>, DataError> {
        get_or_load(&self.claims, path, load_claims)
    }

    /// Locations fixture at `path`, parsed at most once while cached.
    pub fn locations(&self, path: &Path) -> Result<Arc<LocationDataset>, DataError> {
        get_or_load(&self.locations, path, load_locations)
    }

    /// Number of cached files across both kinds.
    pub fn len(&self) -> u64 {
        self.claims.entry_count() + self.locations.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached file; the next load re-reads from disk.
    pub fn clear(&self) {
        self.claims.invalidate_all();
        self.locations.invalidate_all();
    }
}

impl Default for FixtureCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

fn get_or_load<T, F>(
    cache: &Cache<PathBuf, Arc<T>>,
    path: &Path,
    load: F,
) -> Result<Arc<T>, DataError>
where
    T: Send + Sync + 'static,
    F: FnOnce(&Path) -> Result<T, DataError>,
{
    let span = tracing::debug_span!(
        "fixture_load",
        path = %path.display(),
        fixture_cache_hit = tracing::field::Empty,
        fixture_load_time = tracing::field::Empty,
    );
    let _guard = span.enter();

    let key = path.canonicalize().map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Concurrent misses on one key wait for a single load.
    let mut loaded_here = false;
    let dataset = cache
        .try_get_with(key.clone(), || {
            loaded_here = true;
            let started = Instant::now();
            let dataset = load(&key).map(Arc::new);
            span.record(
                metrics::FIXTURE_LOAD_TIME,
                started.elapsed().as_millis() as u64,
            );
            dataset
        })
        .map_err(unshare)?;

    span.record(metrics::FIXTURE_CACHE_HIT, !loaded_here);
    Ok(dataset)
}

/// Recover an owned error from the one moka shares between waiting callers.
/// `io::Error` is not `Clone`, so a shared IO error keeps its kind and text.
fn unshare(err: Arc<DataError>) -> DataError {
    Arc::try_unwrap(err).unwrap_or_else(|shared| match &*shared {
        DataError::Io { path, source } => DataError::Io {
            path: path.clone(),
            source: std::io::Error::new(source.kind(), source.to_string()),
        },
        DataError::Parse { path, message } => DataError::Parse {
            path: path.clone(),
            message: message.clone(),
        },
        DataError::MissingCollection { path, key } => DataError::MissingCollection {
            path: path.clone(),
            key: *key,
        },
        DataError::InvalidRecord {
            path,
            index,
            message,
        } => DataError::InvalidRecord {
            path: path.clone(),
            index: *index,
            message: message.clone(),
        },
    })
}
