//! Rank filtering operations
//!
//! Each pixel whose window fits entirely inside the image is replaced by
//! the sample at a fixed position of its sorted neighborhood. Pixels closer
//! than `half_width` columns or `half_height` rows to an edge are copied
//! through unchanged, leaving an unfiltered border band.
//!
//! The neighborhood is gathered and sorted afresh for every pixel; there is
//! no running-histogram shortcut.

use crate::{FilterError, FilterResult};
use despeckle_core::{ImageBuffer, Window};

/// Apply a median filter.
///
/// The median is the element at index `area / 2` of the sorted window,
/// where `area = window.width() * window.height()`. For even-sized windows
/// that is the upper of the two middle samples.
///
/// # Examples
///
/// ```
/// use despeckle_core::{ImageBuffer, Window};
/// use despeckle_filter::median_filter;
///
/// let mut img = ImageBuffer::filled(5, 5, 40).unwrap();
/// img.put(2, 2, 255); // a single speckle
/// let out = median_filter(&img, Window::square(3).unwrap()).unwrap();
/// assert_eq!(out.pixel(2, 2), 40);
/// ```
pub fn median_filter(img: &ImageBuffer, window: Window) -> FilterResult<ImageBuffer> {
    Ok(filter_at_index(img, window, window.area() / 2))
}

/// Apply a median filter with a `width × height` window.
///
/// `width` counts columns and `height` rows.
///
/// # Errors
///
/// Returns [`FilterError::Core`] if either dimension is 0.
pub fn median_filter_sized(img: &ImageBuffer, width: u32, height: u32) -> FilterResult<ImageBuffer> {
    let window = Window::new(width, height)?;
    median_filter(img, window)
}

/// Apply a rank filter.
///
/// # Arguments
/// * `img` - Input image
/// * `window` - Neighborhood size
/// * `rank` - Rank value in [0.0, 1.0] (0.0=min, 0.5=median, 1.0=max)
///
/// The selected index is `round(rank * (area - 1))`.
pub fn rank_filter(img: &ImageBuffer, window: Window, rank: f32) -> FilterResult<ImageBuffer> {
    if !(0.0..=1.0).contains(&rank) {
        return Err(FilterError::InvalidParameters(format!(
            "rank must be in [0.0, 1.0], got {}",
            rank
        )));
    }
    let index = (rank * (window.area() - 1) as f32).round() as usize;
    Ok(filter_at_index(img, window, index.min(window.area() - 1)))
}

fn filter_at_index(img: &ImageBuffer, window: Window, index: usize) -> ImageBuffer {
    let (w, h) = img.dimensions();
    let half_w = window.half_width();
    let half_h = window.half_height();
    let mut out = img.clone();

    if 2 * half_w >= w || 2 * half_h >= h {
        log::warn!(
            "{}x{} window leaves no filterable pixel in {}x{} image",
            window.width(),
            window.height(),
            w,
            h
        );
        return out;
    }

    let win_w = window.width() as usize;
    let mut scratch: Vec<u8> = Vec::with_capacity(window.area());

    for y in half_h..h - half_h {
        for x in half_w..w - half_w {
            scratch.clear();
            let left = (x - half_w) as usize;
            for wy in 0..window.height() {
                let row = img.row(y + wy - half_h);
                scratch.extend_from_slice(&row[left..left + win_w]);
            }
            scratch.sort_unstable();
            out.put(x, y, scratch[index]);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: u32) -> Window {
        Window::square(size).unwrap()
    }

    #[test]
    fn test_median_removes_salt() {
        let mut img = ImageBuffer::filled(7, 7, 30).unwrap();
        img.put(3, 3, 255);
        img.put(1, 5, 0);
        let out = median_filter(&img, square(3)).unwrap();
        assert_eq!(out.pixel(3, 3), 30);
        assert_eq!(out.pixel(1, 5), 30);
    }

    #[test]
    fn test_border_band_untouched() {
        let mut img = ImageBuffer::filled(6, 6, 10).unwrap();
        img.put(0, 0, 200);
        img.put(5, 3, 201);
        let out = median_filter(&img, square(3)).unwrap();
        assert_eq!(out.pixel(0, 0), 200);
        assert_eq!(out.pixel(5, 3), 201);
    }

    #[test]
    fn test_even_window_takes_upper_middle() {
        // 2x2 window: target at (1,1), window covers (0..2, 0..2)
        let img = ImageBuffer::from_raw(3, 3, vec![1, 2, 0, 3, 4, 0, 0, 0, 0]).unwrap();
        let out = median_filter(&img, Window::new(2, 2).unwrap()).unwrap();
        // sorted [1,2,3,4], index 4/2 = 2
        assert_eq!(out.pixel(1, 1), 3);
    }

    #[test]
    fn test_window_larger_than_image() {
        let img = ImageBuffer::from_fn(4, 4, |x, y| (x * 4 + y) as u8).unwrap();
        let out = median_filter(&img, square(5)).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_rank_extremes() {
        let img = ImageBuffer::from_fn(3, 3, |x, y| (y * 3 + x) as u8 * 10).unwrap();
        let min = rank_filter(&img, square(3), 0.0).unwrap();
        let max = rank_filter(&img, square(3), 1.0).unwrap();
        assert_eq!(min.pixel(1, 1), 0);
        assert_eq!(max.pixel(1, 1), 80);
    }

    #[test]
    fn test_rank_half_matches_median() {
        let img = ImageBuffer::from_fn(9, 7, |x, y| ((x * 37 + y * 91) % 251) as u8).unwrap();
        for (ww, wh) in [(3, 3), (4, 2), (5, 3)] {
            let window = Window::new(ww, wh).unwrap();
            let a = rank_filter(&img, window, 0.5).unwrap();
            let b = median_filter(&img, window).unwrap();
            assert_eq!(a, b, "window {}x{}", ww, wh);
        }
    }

    #[test]
    fn test_rank_out_of_range() {
        let img = ImageBuffer::new(3, 3).unwrap();
        assert!(rank_filter(&img, square(3), 1.5).is_err());
        assert!(rank_filter(&img, square(3), f32::NAN).is_err());
    }

    #[test]
    fn test_sized_rejects_zero() {
        let img = ImageBuffer::new(3, 3).unwrap();
        assert!(matches!(
            median_filter_sized(&img, 0, 3),
            Err(FilterError::Core(_))
        ));
    }
}
