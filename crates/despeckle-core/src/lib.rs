//! Despeckle Core - Basic data structures for grayscale image processing
//!
//! This crate provides the data structures shared by every stage of the
//! despeckle pipeline:
//!
//! - [`ImageBuffer`] - 8-bit grayscale image container
//! - [`Window`] - Rectangular neighborhood centered on a pixel
//! - [`Region`] - Axis-aligned rectangle inside an image (tiles)
//!
//! Every pipeline stage takes an `&ImageBuffer` and returns a freshly
//! allocated one; nothing is modified in place.

pub mod error;
pub mod geometry;
pub mod image;

pub use error::{Error, Result};
pub use geometry::{Region, Window};
pub use image::ImageBuffer;

/// Sample value of a foreground ("white") pixel in a binary image.
pub const WHITE: u8 = 255;

/// Sample value of a background ("black") pixel in a binary image.
pub const BLACK: u8 = 0;
