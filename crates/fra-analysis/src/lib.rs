//! Analysis layer for FRA progress data.
//!
//! - `claims`: status aggregation, geography-scoped wrappers, and the
//!   national → state → district → block → village roll-up.
//! - `locations`: facet filtering, option lists for cascading selectors,
//!   and statistics over precomputed location metrics.
//! - `stats`: small shared reducers (mode, rounding, percentages).
//!
//! Everything here is synchronous and pure over borrowed input.

pub mod claims;
pub mod locations;
pub mod stats;

pub use claims::{
    aggregate, resolve_hierarchy, HierarchyLevel, HierarchyResolver, RegionProgress,
};
pub use locations::{aggregate_location_stats, filter_locations, LocationStats};
pub use stats::most_common;
