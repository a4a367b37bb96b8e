//! Storage layer for the FRA engine.
//!
//! Reads the static claims and locations fixtures, keeps parsed files in a
//! moka cache keyed by canonical path, and exposes them through the
//! `ClaimSource` / `LocationSource` traits.

pub mod cache;
pub mod fixtures;
pub mod store;

pub use cache::FixtureCache;
pub use fixtures::{load_claims, load_locations, ClaimDataset, LocationDataset, SummaryTables};
pub use store::FixtureStore;
