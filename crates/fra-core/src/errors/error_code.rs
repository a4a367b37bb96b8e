//! FraErrorCode trait for boundary conversion.

/// Structured error code for consumers on the far side of a language
/// boundary (the dashboard front end). Every error enum implements it.
pub trait FraErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DATA_IO_ERROR: &str = "DATA_IO_ERROR";
pub const DATA_PARSE_ERROR: &str = "DATA_PARSE_ERROR";
pub const DATA_SCHEMA_ERROR: &str = "DATA_SCHEMA_ERROR";
