//! Boundary erosion and dilation
//!
//! Both operations visit white (255) pixels whose full `size × size`
//! neighborhood contains at least one black (0) sample, i.e. pixels on the
//! boundary of a white region. Every such pixel stamps the mask around
//! itself: erosion writes 0 at each active offset, dilation writes 255.
//!
//! The neighborhood test reads from the input image and the stamps go to a
//! separate output seeded as a copy of the input. Since an operation only
//! ever writes one value, the result does not depend on scan order.
//!
//! The zero test looks at the whole square, not just the active elements of
//! the mask.

use crate::{MorphError, MorphResult, StructuringMask};
use despeckle_core::{BLACK, ImageBuffer, WHITE};

/// Morphological step kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// Clear mask-covered neighbors of boundary pixels
    Erode,
    /// Fill mask-covered neighbors of boundary pixels
    Dilate,
}

impl MorphOp {
    /// Value stamped at active offsets.
    #[inline]
    pub fn stamp(self) -> u8 {
        match self {
            MorphOp::Erode => BLACK,
            MorphOp::Dilate => WHITE,
        }
    }
}

/// Which pixels are eligible as stamp centers.
///
/// Both policies skip the first `size / 2` rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanBounds {
    /// No margin at the right and bottom edges. Neighborhood positions
    /// falling outside the image are ignored for the zero test and for
    /// the stamps.
    #[default]
    LowerMargin,
    /// Skip the last `size / 2` rows and columns as well, so every
    /// neighborhood lies inside the image.
    Symmetric,
}

/// Apply one erosion or dilation step.
///
/// # Errors
///
/// Returns [`MorphError::NotBinary`] if the image holds a sample other than
/// 0 or 255.
pub fn morph_step(
    img: &ImageBuffer,
    mask: &StructuringMask,
    op: MorphOp,
    bounds: ScanBounds,
) -> MorphResult<ImageBuffer> {
    check_binary(img)?;

    let (w, h) = img.dimensions();
    let half = mask.half();
    let (x_end, y_end) = match bounds {
        ScanBounds::LowerMargin => (w, h),
        ScanBounds::Symmetric => (w.saturating_sub(half), h.saturating_sub(half)),
    };

    let offsets: Vec<(i64, i64)> = mask.active_offsets().collect();
    let stamp = op.stamp();
    let mut out = img.clone();
    let mut centers = 0usize;

    for y in half..y_end {
        for x in half..x_end {
            if img.pixel(x, y) != WHITE || !touches_black(img, x, y, half) {
                continue;
            }
            centers += 1;
            for &(dx, dy) in &offsets {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if img.contains_signed(nx, ny) {
                    out.put(nx as u32, ny as u32, stamp);
                }
            }
        }
    }

    log::trace!(
        "{:?} with {}x{} mask: {} boundary pixels",
        op,
        mask.size(),
        mask.size(),
        centers
    );
    Ok(out)
}

/// Erode white regions with the default scan bounds.
pub fn erode(img: &ImageBuffer, mask: &StructuringMask) -> MorphResult<ImageBuffer> {
    morph_step(img, mask, MorphOp::Erode, ScanBounds::default())
}

/// Dilate white regions with the default scan bounds.
pub fn dilate(img: &ImageBuffer, mask: &StructuringMask) -> MorphResult<ImageBuffer> {
    morph_step(img, mask, MorphOp::Dilate, ScanBounds::default())
}

/// Opening: erosion followed by dilation with the same mask.
pub fn open(img: &ImageBuffer, mask: &StructuringMask) -> MorphResult<ImageBuffer> {
    let eroded = erode(img, mask)?;
    dilate(&eroded, mask)
}

/// Closing: dilation followed by erosion with the same mask.
pub fn close(img: &ImageBuffer, mask: &StructuringMask) -> MorphResult<ImageBuffer> {
    let dilated = dilate(img, mask)?;
    erode(&dilated, mask)
}

/// Whether the square of radius `half` around (x, y), clipped to the image,
/// holds a black sample. Callers guarantee `x >= half` and `y >= half`.
fn touches_black(img: &ImageBuffer, x: u32, y: u32, half: u32) -> bool {
    let x0 = (x - half) as usize;
    let x1 = (x + half).min(img.width() - 1) as usize;
    let y1 = (y + half).min(img.height() - 1);
    (y - half..=y1).any(|ny| img.row(ny)[x0..=x1].contains(&BLACK))
}

fn check_binary(img: &ImageBuffer) -> MorphResult<()> {
    match img
        .data()
        .iter()
        .position(|&v| v != BLACK && v != WHITE)
    {
        None => Ok(()),
        Some(i) => {
            let w = img.width() as usize;
            Err(MorphError::NotBinary {
                x: (i % w) as u32,
                y: (i / w) as u32,
                value: img.data()[i],
            })
        }
    }
}
