//! ImageBuffer - 8-bit grayscale image container
//!
//! # Pixel layout
//!
//! - One byte per pixel, rows stored top to bottom without padding
//! - `x` is the column index (`0 <= x < width`)
//! - `y` is the row index (`0 <= y < height`)
//!
//! # Ownership model
//!
//! `ImageBuffer` owns its samples. `Clone` is a deep copy, so a stage that
//! seeds its output from the input never aliases the caller's storage.

mod access;

use crate::error::{Error, Result};
use crate::geometry::Region;
use crate::{BLACK, WHITE};

/// Grayscale image with one `u8` sample per pixel.
///
/// # Examples
///
/// ```
/// use despeckle_core::ImageBuffer;
///
/// let img = ImageBuffer::new(640, 480).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.get(10, 10), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new image with every sample set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, BLACK)
    }

    /// Create a new image with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Wrap an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::DataLength`] if `data.len() != width * height`
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` at every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u8,
    {
        let mut img = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                img.put(x, y, f(x, y));
            }
        }
        Ok(img)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: zero-sized images cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw row-major samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Whole-image region.
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }

    /// Collect the samples inside `region` (row by row, left to right).
    ///
    /// The region is clipped to the image first; an empty result means the
    /// region did not overlap the image.
    pub fn region_samples(&self, region: Region) -> Vec<u8> {
        let r = region.clamp_to(self.width, self.height);
        let mut out = Vec::with_capacity(r.area());
        for y in r.y..r.bottom() {
            let row = self.row(y);
            out.extend_from_slice(&row[r.x as usize..r.right() as usize]);
        }
        out
    }

    /// Check that every sample is either 0 or 255.
    pub fn is_binary(&self) -> bool {
        self.data.iter().all(|&v| v == BLACK || v == WHITE)
    }

    /// Count samples equal to `value`.
    pub fn count_value(&self, value: u8) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
