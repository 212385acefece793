//! Custom error types for the transaction logger
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. "Not found" outcomes of index and category
//! lookups are not errors: the ledger reports them as `None`.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid input, such as a negative amount or an empty edit
    #[error("Validation error: {0}")]
    Validation(String),

    /// The persisted ledger document could not be parsed at all
    #[error("Malformed storage document {path}: {reason}")]
    MalformedStorage { path: String, reason: String },

    /// A single stored record is missing or has an invalid field
    #[error("Malformed record at position {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a validation error for a negative amount
    pub fn negative_amount() -> Self {
        Self::Validation("Amount cannot be negative".into())
    }

    /// Create a validation error for an amount too large to store
    pub fn amount_out_of_range() -> Self {
        Self::Validation("Amount is too large".into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from a malformed stored record
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
