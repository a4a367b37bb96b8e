//! Top-level error aggregating the subsystem errors.

use super::error_code::FraErrorCode;
use super::{ConfigError, DataError};

/// Errors surfaced while bringing the engine up (config + fixtures).
#[derive(Debug, thiserror::Error)]
pub enum FraError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

impl FraErrorCode for FraError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Data(e) => e.error_code(),
        }
    }
}
