//! Shared reducers used by the claim and location roll-ups.

pub mod mode;
pub mod rounding;

pub use mode::most_common;
pub use rounding::{mean, percentage, round_half_up};
