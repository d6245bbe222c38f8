//! Windows and regions
//!
//! [`Window`] describes the rectangular neighborhood a filter gathers around
//! a target pixel; [`Region`] is an absolute rectangle inside an image, used
//! for tiling.

use crate::error::{Error, Result};

/// Rectangular neighborhood centered on a target pixel.
///
/// The target pixel sits at offset `floor(dimension / 2)` on each axis, so
/// an even-sized window reaches one sample further up and left than down
/// and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    width: u32,
    height: u32,
}

impl Window {
    /// Create a window of `width` columns by `height` rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "window must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Create a `size × size` window.
    pub fn square(size: u32) -> Result<Self> {
        Self::new(size, size)
    }

    /// Window width (columns).
    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Window height (rows).
    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Horizontal offset of the target pixel inside the window.
    #[inline]
    pub fn half_width(self) -> u32 {
        self.width / 2
    }

    /// Vertical offset of the target pixel inside the window.
    #[inline]
    pub fn half_height(self) -> u32 {
        self.height / 2
    }

    /// Number of samples covered by the window.
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Window {
    /// 3x3, the window the pipeline uses for both median passes.
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
        }
    }
}

/// Axis-aligned rectangle inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Width in columns
    pub width: u32,
    /// Height in rows
    pub height: u32,
}

impl Region {
    /// Create a region. Zero-sized regions are allowed and contain no pixels.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One column past the right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// One row past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Number of pixels in the region.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether the region contains no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clip the region to an image of `width × height`.
    ///
    /// A region that starts outside the image becomes empty.
    pub fn clamp_to(&self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.right().min(width) - x,
            height: self.bottom().min(height) - y,
        }
    }
}
