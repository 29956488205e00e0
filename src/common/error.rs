//! Error handling for greffe-index

use thiserror::Error;

/// Main error type for greffe-index operations
#[derive(Error, Debug)]
pub enum GreffeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<String>),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GreffeError>;

/// Result type alias for greffe-index operations (alias for Result)
pub type GreffeResult<T> = std::result::Result<T, GreffeError>;
