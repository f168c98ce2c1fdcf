//! Error types for despeckle-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),

    /// Malformed pixel data or parameters, detected before any pixel is read
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A filter kind token that names none of the known filters
    #[error("unsupported filter kind: {0:?}")]
    UnsupportedFilterKind(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
