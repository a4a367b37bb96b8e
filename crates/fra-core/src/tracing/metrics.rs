//! Structured span field names shared across the FRA crates.
//!
//! Consistent names keep log queries over spans from different crates
//! comparable.

/// Aggregator: number of claim records reduced into one summary.
pub const CLAIMS_AGGREGATED: &str = "claims_aggregated";

/// Resolver: level chosen for a hierarchy request.
pub const HIERARCHY_LEVEL: &str = "hierarchy_level";

/// Resolver: number of child regions produced.
pub const CHILD_REGIONS: &str = "child_regions";

/// Location filter: records kept after filtering.
pub const LOCATIONS_MATCHED: &str = "locations_matched";

/// Storage: fixture load time in milliseconds.
pub const FIXTURE_LOAD_TIME: &str = "fixture_load_time";

/// Storage: whether a fixture came from the cache.
pub const FIXTURE_CACHE_HIT: &str = "fixture_cache_hit";
