//! Binarization
//!
//! Maps each pixel to 255 when `value >= threshold` and to 0 otherwise.
//! The threshold is a `u16` so that 256 can express "everything black".

use crate::{ThresholdError, ThresholdResult, otsu_threshold_image, otsu_threshold_region};
use despeckle_core::{BLACK, ImageBuffer, Region, WHITE};

/// Options for tiled binarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOptions {
    /// Tile width in pixels (default: 10)
    pub tile_width: u32,
    /// Tile height in pixels (default: 10)
    pub tile_height: u32,
    /// When set, every tile uses this threshold instead of its own Otsu
    /// estimate (default: None)
    pub fixed: Option<u16>,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            tile_width: 10,
            tile_height: 10,
            fixed: None,
        }
    }
}

impl TileOptions {
    /// Override every tile's threshold with `threshold`.
    pub fn with_fixed(mut self, threshold: u16) -> Self {
        self.fixed = Some(threshold);
        self
    }
}

/// Where the binarization threshold comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdSource {
    /// A constant threshold
    Fixed(u16),
    /// One Otsu threshold computed over the whole image
    GlobalOtsu,
    /// Independent Otsu thresholds per tile
    Tiled(TileOptions),
}

impl Default for ThresholdSource {
    fn default() -> Self {
        Self::Fixed(210)
    }
}

/// Binarize an image with a single threshold.
///
/// Every pixel is visited; there is no border exclusion. A threshold of 0
/// gives an all-white image and 256 an all-black one.
pub fn binarize(img: &ImageBuffer, threshold: u16) -> ImageBuffer {
    let mut out = img.clone();
    for v in out.data_mut() {
        *v = if *v as u16 >= threshold { WHITE } else { BLACK };
    }
    out
}

/// Binarize tile by tile.
///
/// Tiles start at the top-left corner and are clipped at the right and
/// bottom borders. Each tile is thresholded with its own Otsu estimate,
/// unless [`TileOptions::fixed`] is set.
///
/// # Errors
///
/// Returns [`ThresholdError::InvalidParameters`] if a tile dimension is 0.
pub fn binarize_tiled(img: &ImageBuffer, options: &TileOptions) -> ThresholdResult<ImageBuffer> {
    if options.tile_width == 0 || options.tile_height == 0 {
        return Err(ThresholdError::InvalidParameters(format!(
            "tile must be at least 1x1, got {}x{}",
            options.tile_width, options.tile_height
        )));
    }

    let (w, h) = img.dimensions();
    let mut out = img.clone();

    for ty in (0..h).step_by(options.tile_height as usize) {
        for tx in (0..w).step_by(options.tile_width as usize) {
            let tile = Region::new(tx, ty, options.tile_width, options.tile_height).clamp_to(w, h);
            let threshold = match options.fixed {
                Some(t) => t,
                None => otsu_threshold_region(img, tile)?,
            };
            log::trace!("tile ({}, {}) threshold {}", tx, ty, threshold);

            for y in tile.y..tile.bottom() {
                for x in tile.x..tile.right() {
                    let v = if img.pixel(x, y) as u16 >= threshold {
                        WHITE
                    } else {
                        BLACK
                    };
                    out.put(x, y, v);
                }
            }
        }
    }

    Ok(out)
}

/// Binarize using whichever threshold `source` names.
pub fn binarize_with(img: &ImageBuffer, source: &ThresholdSource) -> ThresholdResult<ImageBuffer> {
    match source {
        ThresholdSource::Fixed(t) => Ok(binarize(img, *t)),
        ThresholdSource::GlobalOtsu => {
            let t = otsu_threshold_image(img)?;
            log::debug!("global Otsu threshold {}", t);
            Ok(binarize(img, t))
        }
        ThresholdSource::Tiled(options) => binarize_tiled(img, options),
    }
}
