//! despeckle-threshold - Threshold selection and binarization
//!
//! - **Histogram** ([`histogram`]): level counts over a sample set, shifted
//!   so that index 0 is the smallest observed value
//! - **Otsu** ([`otsu`]): between-class variance maximization, over a flat
//!   sample list, a whole image, or a single tile
//! - **Binarization** ([`binarize`]): fixed-threshold mapping to {0, 255},
//!   plus tiled binarization with a per-tile threshold
//!
//! Threshold selection is pure; which threshold the pipeline actually uses
//! is decided by the caller through [`ThresholdSource`].

pub mod binarize;
mod error;
pub mod histogram;
pub mod otsu;

pub use binarize::{ThresholdSource, TileOptions, binarize, binarize_tiled, binarize_with};
pub use error::{ThresholdError, ThresholdResult};
pub use histogram::Histogram;
pub use otsu::{
    otsu_threshold, otsu_threshold_from_histogram, otsu_threshold_image, otsu_threshold_region,
};
