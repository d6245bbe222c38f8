//! Error types for despeckle-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),

    /// Invalid structuring mask
    #[error("invalid structuring mask: {0}")]
    InvalidMask(String),

    /// Input holds samples other than 0 and 255
    #[error("image is not binary: found sample {value} at ({x}, {y})")]
    NotBinary { x: u32, y: u32, value: u8 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
