//! Error types for loading domain records.

use thiserror::Error;

/// Result type alias for reactome-model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading records.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The input was not valid JSON, or did not match the record shape.
    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}
