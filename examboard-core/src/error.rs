//! Error types for the examboard ecosystem.

use thiserror::Error;

/// Errors that can occur in examboard operations.
#[derive(Error, Debug)]
pub enum ExamBoardError {
    #[error("Failed to fetch '{resource}': {reason}")]
    Transport { resource: String, reason: String },

    #[error("Invalid JSON: {0}")]
    Format(String),

    #[error("Expected a JSON array of exam records: {0}")]
    Schema(String),

    #[error("Missing required field(s): {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("No data source to refresh from")]
    NoSource,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for examboard operations.
pub type ExamBoardResult<T> = Result<T, ExamBoardError>;
