//! Claim aggregation and hierarchical roll-up.

pub mod aggregator;
pub mod diagnostics;
pub mod hierarchy;
pub mod types;

pub use aggregator::{
    aggregate, aggregate_block_progress, aggregate_district_progress, aggregate_scope,
    aggregate_state_progress, aggregate_village_progress, unrecognized_claims, ClaimScope,
};
pub use diagnostics::{inspect_claims, MalformedReport};
pub use hierarchy::{
    block_progress_list, blocks_for_district, district_progress_list, districts_for_state_claims,
    resolve_hierarchy, resolve_hierarchy_with_label, state_progress_list, states_in_claims,
    village_progress_list, villages_for_block, HierarchyResolver,
};
pub use types::{HierarchyLevel, RegionProgress};
