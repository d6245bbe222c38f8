//! Error types for despeckle-filter

use thiserror::Error;

/// Errors raised by the rank filters
#[derive(Debug, Error)]
pub enum FilterError {
    /// Degenerate window
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),

    /// Rank outside `[0.0, 1.0]`
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
