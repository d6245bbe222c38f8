//! Synthetic test images
//!
//! Every fixture is deterministic so regression checks can assert exact
//! pixel values.

use despeckle_core::{BLACK, ImageBuffer, Region, WHITE};

/// Black image with a white rectangle covering `square`.
pub fn square_on_black(width: u32, height: u32, square: Region) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, y| {
        if x >= square.x && x < square.right() && y >= square.y && y < square.bottom() {
            WHITE
        } else {
            BLACK
        }
    })
    .expect("fixture dimensions are non-zero")
}

/// Horizontal ramp: each column holds `(x * 255) / (width - 1)`.
pub fn horizontal_ramp(width: u32, height: u32) -> ImageBuffer {
    let span = width.saturating_sub(1).max(1);
    ImageBuffer::from_fn(width, height, |x, _| ((x * 255) / span) as u8)
        .expect("fixture dimensions are non-zero")
}

/// Dark background (`dark`) with a bright block (`bright`) and isolated
/// salt/pepper pixels scattered on a fixed lattice.
///
/// Salt (255) lands on the background at every `(x + 2y) % 7 == 0` site with
/// `x % 5 == 3`; pepper (0) lands inside the block at `(x + y) % 6 == 0`
/// sites with `y % 4 == 1`. Neither lattice ever puts two speckles in the
/// same 3x3 neighborhood.
pub fn speckled_block(width: u32, height: u32, block: Region, dark: u8, bright: u8) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, y| {
        let inside = x >= block.x && x < block.right() && y >= block.y && y < block.bottom();
        if inside {
            if (x + y) % 6 == 0 && y % 4 == 1 {
                0
            } else {
                bright
            }
        } else if (x + 2 * y) % 7 == 0 && x % 5 == 3 {
            255
        } else {
            dark
        }
    })
    .expect("fixture dimensions are non-zero")
}

/// `low_count` samples at `low` followed by `high_count` samples at `high`.
pub fn bimodal_samples(low: u8, low_count: usize, high: u8, high_count: usize) -> Vec<u8> {
    let mut v = vec![low; low_count];
    v.extend(std::iter::repeat_n(high, high_count));
    v
}
