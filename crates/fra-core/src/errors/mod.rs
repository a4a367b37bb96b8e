//! Error handling for the FRA engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The aggregation core itself is total and never returns these; they cover
//! configuration and fixture loading only.

pub mod config_error;
pub mod data_error;
pub mod error_code;
pub mod fra_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use error_code::FraErrorCode;
pub use fra_error::FraError;
