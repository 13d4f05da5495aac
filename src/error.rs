//! Error types for the salestat pipeline.

use thiserror::Error;

/// Result type alias using [`SalestatError`]
pub type Result<T> = std::result::Result<T, SalestatError>;

/// Errors surfaced by the pipeline.
///
/// Numeric parse failures during encoding are deliberately NOT represented
/// here: they degrade to `0.0` (see [`crate::encode`]), so the only fatal
/// conditions are malformed input structure and underlying stream failures.
#[derive(Error, Debug)]
pub enum SalestatError {
    /// A data row's field count disagrees with the header's
    #[error("expected {expected} columns, got {actual} columns in row {row}")]
    SchemaMismatch {
        expected: usize,
        actual: usize,
        row: usize,
    },

    /// Underlying CSV read failure, propagated unchanged
    #[error("stream error: {0}")]
    StreamError(#[from] csv::Error),

    /// I/O failure outside the CSV reader
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed or unusable data
    #[error("data error: {0}")]
    DataError(String),

    /// Invalid configuration or arguments
    #[error("validation error: {0}")]
    ValidationError(String),

    /// A referenced column does not exist
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// JSON (de)serialization failure
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
