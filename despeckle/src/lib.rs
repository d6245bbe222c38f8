//! Despeckle - grayscale denoising and segmentation
//!
//! # Overview
//!
//! A fixed five-stage pipeline that turns a noisy grayscale scan into a
//! clean two-level image:
//!
//! 1. median filter
//! 2. binarization (fixed, global Otsu or per-tile Otsu threshold)
//! 3. erosion with a structuring mask
//! 4. a second median filter pass
//! 5. dilation with a structuring mask
//!
//! The stage crates are re-exported as modules for direct use.
//!
//! # Example
//!
//! ```
//! use despeckle::{ImageBuffer, Pipeline, PipelineConfig};
//!
//! let img = ImageBuffer::filled(32, 32, 230).unwrap();
//! let out = Pipeline::new(PipelineConfig::default()).run(&img).unwrap();
//! assert!(out.is_binary());
//! assert_eq!(out.dimensions(), (32, 32));
//! ```

mod error;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use despeckle_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use despeckle_filter as filter;
pub use despeckle_io as io;
pub use despeckle_morph as morph;
pub use despeckle_threshold as threshold;

pub use error::{PipelineError, PipelineResult};
pub use pipeline::{
    PRESET_THRESHOLDS, Pipeline, PipelineConfig, PipelineStages, preset_threshold,
};
