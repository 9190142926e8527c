//! Error types for the data-loader crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - `#[from]` conversions so `?` works on io and serde_json errors
//! - Error messages that carry the location that failed

use thiserror::Error;

/// Errors that can occur while loading configuration or category files
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document was not valid JSON for the expected shape
    #[error("Parse error in {location}: {source}")]
    ParseError {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field had a value we cannot work with
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
