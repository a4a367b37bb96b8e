//! Location filtering, selector facets and precomputed-metric statistics.

pub mod facets;
pub mod filter;
pub mod stats;

pub use facets::{
    districts_for_state, normalize_filters, unique_states, unique_tribal_groups,
    villages_for_district,
};
pub use filter::{filter_locations, LocationFilter};
pub use stats::{
    aggregate_location_stats, rollup_summaries, scheme_eligibility, LocationStats,
    SchemeCoverage,
};
