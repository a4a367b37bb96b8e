//! Fixture loading errors.

use std::path::PathBuf;

use super::error_code::{self, FraErrorCode};

/// Errors that can occur while reading the static JSON fixtures.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Fixture parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Fixture {path} has no `{key}` collection")]
    MissingCollection { path: PathBuf, key: &'static str },

    #[error("Invalid record {index} in {path}: {message}")]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        message: String,
    },
}

impl FraErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::DATA_IO_ERROR,
            Self::Parse { .. } => error_code::DATA_PARSE_ERROR,
            Self::MissingCollection { .. } | Self::InvalidRecord { .. } => {
                error_code::DATA_SCHEMA_ERROR
            }
        }
    }
}
