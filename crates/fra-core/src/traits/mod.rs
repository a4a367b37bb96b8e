//! Data-access traits.
//!
//! The analysis crate never reaches for fixtures on its own: callers pass a
//! source in. The storage crate implements these for its fixture store.

pub mod data_source;

pub use data_source::{ClaimSource, LocationSource};
