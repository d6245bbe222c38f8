//! Error types for despeckle-threshold

use thiserror::Error;

/// Errors that can occur during threshold selection
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),

    /// No samples to build a histogram from
    #[error("empty region: no samples to threshold")]
    EmptyRegion,

    /// The histogram buffer could not be allocated
    #[error("histogram allocation failed for {levels} levels")]
    AllocationFailed { levels: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
