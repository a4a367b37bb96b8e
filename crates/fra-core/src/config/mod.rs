//! Configuration system for the FRA engine.
//! TOML-based, 4-layer resolution: overrides > env > project > user > defaults.

pub mod analysis_config;
pub mod data_config;
pub mod fra_config;

pub use analysis_config::AnalysisConfig;
pub use data_config::DataConfig;
pub use fra_config::{ConfigOverrides, FraConfig};
