//! I/O error types

use thiserror::Error;

/// Error type for image decoding and encoding.
///
/// Codec-specific errors are flattened into [`IoError::DecodeError`] and
/// [`IoError::EncodeError`] messages.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format not recognized, or its cargo feature is disabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed header or inconsistent sample count
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The codec rejected the input
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The codec could not encode the image
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded dimensions were rejected by [`despeckle_core::ImageBuffer`]
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),
}

/// Result type for image I/O.
pub type IoResult<T> = Result<T, IoError>;
