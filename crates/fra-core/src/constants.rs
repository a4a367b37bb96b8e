//! Shared constants for the FRA progress analysis engine.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the national roll-up region.
pub const DEFAULT_NATIONAL_LABEL: &str = "All India";

/// Default claims fixture path, relative to the project root.
pub const DEFAULT_CLAIMS_PATH: &str = "data/claims.json";

/// Default locations fixture path, relative to the project root.
pub const DEFAULT_LOCATIONS_PATH: &str = "data/locations.json";

/// Default number of parsed fixture files kept in the cache.
pub const DEFAULT_CACHE_CAPACITY: u64 = 8;

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "fra.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "FRA_LOG";

/// Summary text when no filter is active.
pub const ALL_LOCATIONS_LABEL: &str = "All Locations";

/// Fallback labels used by the location roll-up when no location carries a value.
pub const DEFAULT_FIRE_LEVEL: &str = "Medium";
pub const DEFAULT_CONSERVATION_STATUS: &str = "Moderate";
pub const DEFAULT_GROUNDWATER_LEVEL: &str = "Moderate";
pub const DEFAULT_CLASSIFICATION_MODEL: &str = "CNN";
pub const DEFAULT_DEPENDENCY: &str = "Medium";
pub const DEFAULT_POPULATION_TREND: &str = "Stable";
pub const DEFAULT_PROGRESS_STATUS: &str = "Active";
