//! Core crate for the FRA progress analysis engine.
//!
//! Claim and location record types, the data-access traits the analysis
//! crate is written against, per-subsystem errors, layered TOML config and
//! tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::FraConfig;
pub use errors::{ConfigError, DataError, FraError, FraErrorCode};
pub use traits::{ClaimSource, LocationSource};
pub use types::{
    ClaimRecord, ClaimStatus, FilterState, HierarchyFilter, LocationRecord, ProgressSummary,
};
