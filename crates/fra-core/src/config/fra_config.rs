//! Top-level configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, DataConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`FRA_*`)
/// 3. Project config (`fra.toml` in project root)
/// 4. User config (`~/.fra/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FraConfig {
    pub data: DataConfig,
    pub analysis: AnalysisConfig,
}

/// Override arguments supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub claims_path: Option<PathBuf>,
    pub locations_path: Option<PathBuf>,
    pub national_label: Option<String>,
}

impl FraConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &FraConfig) -> Result<(), ConfigError> {
        if config.data.cache_capacity == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "data.cache_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref label) = config.analysis.national_label {
            if label.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.national_label".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Path of the user-level config file, if a home directory is known.
    pub fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".fra").join("config.toml"))
    }

    fn merge_toml_file(config: &mut FraConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let other: FraConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::merge(config, &other);
        Ok(())
    }

    /// Merge `other` into `base`; set fields in `other` win.
    fn merge(base: &mut FraConfig, other: &FraConfig) {
        if other.data.claims_path.is_some() {
            base.data.claims_path = other.data.claims_path.clone();
        }
        if other.data.locations_path.is_some() {
            base.data.locations_path = other.data.locations_path.clone();
        }
        if other.data.cache_capacity.is_some() {
            base.data.cache_capacity = other.data.cache_capacity;
        }
        if other.analysis.national_label.is_some() {
            base.analysis.national_label = other.analysis.national_label.clone();
        }
        if other.analysis.warn_on_malformed.is_some() {
            base.analysis.warn_on_malformed = other.analysis.warn_on_malformed;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FRA_DATA_CLAIMS_PATH`, `FRA_ANALYSIS_NATIONAL_LABEL`, etc.
    fn apply_env_overrides(config: &mut FraConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("FRA_DATA_CLAIMS_PATH") {
            config.data.claims_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("FRA_DATA_LOCATIONS_PATH") {
            config.data.locations_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("FRA_DATA_CACHE_CAPACITY") {
            let v = val.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                field: "FRA_DATA_CACHE_CAPACITY".to_string(),
                message: e.to_string(),
            })?;
            config.data.cache_capacity = Some(v);
        }
        if let Ok(val) = std::env::var("FRA_ANALYSIS_NATIONAL_LABEL") {
            config.analysis.national_label = Some(val);
        }
        if let Ok(val) = std::env::var("FRA_ANALYSIS_WARN_ON_MALFORMED") {
            let v = val.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                field: "FRA_ANALYSIS_WARN_ON_MALFORMED".to_string(),
                message: e.to_string(),
            })?;
            config.analysis.warn_on_malformed = Some(v);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut FraConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.claims_path {
            config.data.claims_path = Some(v.clone());
        }
        if let Some(ref v) = overrides.locations_path {
            config.data.locations_path = Some(v.clone());
        }
        if let Some(ref v) = overrides.national_label {
            config.analysis.national_label = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
