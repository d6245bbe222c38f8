//! Errors raised by the regression harness itself

use thiserror::Error;

/// Harness failure, as opposed to a failed check
#[derive(Debug, Error)]
pub enum TestError {
    /// A debug image could not be encoded or saved
    #[error("cannot save '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// The output directory could not be created
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for harness operations
pub type TestResult<T> = Result<T, TestError>;
