//! Error types for sales-types crate.

use thiserror::Error;

/// Errors that can occur while encoding or decoding sales envelopes.
#[derive(Error, Debug)]
pub enum SalesTypesError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Field '{field}' out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
}

/// Result type alias for sales-types operations.
pub type Result<T> = std::result::Result<T, SalesTypesError>;
