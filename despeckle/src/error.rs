//! Error types for the despeckle pipeline

use thiserror::Error;

/// Errors raised by any pipeline stage
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),

    /// Median filter failure
    #[error("filter error: {0}")]
    Filter(#[from] despeckle_filter::FilterError),

    /// Threshold selection or binarization failure
    #[error("threshold error: {0}")]
    Threshold(#[from] despeckle_threshold::ThresholdError),

    /// Erosion or dilation failure
    #[error("morphology error: {0}")]
    Morph(#[from] despeckle_morph::MorphError),

    /// Image read or write failure
    #[error("I/O error: {0}")]
    Io(#[from] despeckle_io::IoError),

    /// Preset identifier outside the preset table
    #[error("unknown preset {id}: expected 1..={max}")]
    UnknownPreset { id: u32, max: usize },
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
