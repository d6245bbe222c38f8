//! despeckle-morph - Binary morphology driven by a structuring mask
//!
//! This crate provides:
//!
//! - [`StructuringMask`]: an odd-sized square of active/inactive offsets
//! - Boundary erosion and dilation of white (255) regions
//! - Opening and closing built from the two

pub mod binary;
mod error;
pub mod mask;

pub use binary::{MorphOp, ScanBounds, close, dilate, erode, morph_step, open};
pub use error::{MorphError, MorphResult};
pub use mask::StructuringMask;
