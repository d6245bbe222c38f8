//! Pixel access functions
//!
//! Checked accessors return `Option`/`Result`; the short forms
//! [`ImageBuffer::pixel`] and [`ImageBuffer::put`] panic on out-of-range
//! coordinates instead, for inner loops whose bounds are already proven.

use super::ImageBuffer;
use crate::error::{Error, Result};

impl ImageBuffer {
    /// Check whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Check whether the signed coordinate `(x, y)` lies inside the image.
    #[inline]
    pub fn contains_signed(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if self.contains(x, y) {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a pixel value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        assert!(
            self.contains(x, y),
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        self.data[self.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = val;
        Ok(())
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, val: u8) {
        assert!(
            self.contains(x, y),
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.data[idx] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut img = ImageBuffer::new(5, 4).unwrap();
        img.set(4, 3, 99).unwrap();
        assert_eq!(img.get(4, 3), Some(99));
        assert_eq!(img.pixel(4, 3), 99);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let img = ImageBuffer::new(5, 4).unwrap();
        assert_eq!(img.get(5, 0), None);
        assert_eq!(img.get(0, 4), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut img = ImageBuffer::new(5, 4).unwrap();
        let err = img.set(0, 4, 1).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { x: 0, y: 4, .. }));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_panics() {
        let img = ImageBuffer::new(2, 2).unwrap();
        let _ = img.pixel(2, 0);
    }

    #[test]
    fn test_contains_signed() {
        let img = ImageBuffer::new(3, 3).unwrap();
        assert!(img.contains_signed(0, 2));
        assert!(!img.contains_signed(-1, 0));
        assert!(!img.contains_signed(0, 3));
    }
}
