//! Record types for the FRA engine.
//! Claim and location records as loaded from fixtures, the computed progress
//! summary, and the filter shapes the UI hands to the analysis crate.

pub mod claim;
pub mod collections;
pub mod filter;
pub mod identifiers;
pub mod location;
pub mod progress;
pub mod serde_helpers;

pub use claim::{ClaimRecord, ClaimStatus, RightsType};
pub use collections::{FxHashMap, FxHashSet};
pub use filter::{FilterState, HierarchyFilter};
pub use identifiers::{ClaimId, LocationId};
pub use location::{
    Coordinates, DataLayers, FraProgress, LandUse, LocationKind, LocationRecord, RiskMetrics,
    SchemeEligibility,
};
pub use progress::{ProgressSummary, RegionSummary};
