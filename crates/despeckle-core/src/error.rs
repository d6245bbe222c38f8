//! Error types for despeckle-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Despeckle core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw sample buffer does not match the declared dimensions
    #[error("data length mismatch: {width}x{height} needs {expected} samples, got {actual}")]
    DataLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinate out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
