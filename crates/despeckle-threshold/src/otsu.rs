//! Otsu threshold selection
//!
//! For every candidate split level `i` (shifted, `0 <= i < max - min`) the
//! samples are divided into a lower class `<= i` and an upper class `> i`,
//! and the between-class variance proxy
//!
//! ```text
//! w1    = beta / total
//! a     = alpha / beta - (sum - alpha) / (total - beta)
//! sigma = w1 * (1 - w1) * a^2
//! ```
//!
//! is evaluated, where `alpha` and `beta` are the running weighted and
//! plain counts of the lower class and `sum` is the weighted count of the
//! whole histogram. The level with the largest `sigma` wins. The top level
//! is never a candidate, so the upper class is never empty.

use crate::{Histogram, ThresholdResult};
use despeckle_core::{ImageBuffer, Region};

/// Compute Otsu's threshold over a flat list of samples.
///
/// The returned threshold lies in `[min, max]` of the samples. Samples
/// `<= threshold` form the lower class.
///
/// # Errors
///
/// Returns [`crate::ThresholdError::EmptyRegion`] if `samples` is empty.
///
/// # Examples
///
/// ```
/// use despeckle_threshold::otsu_threshold;
///
/// let mut samples = vec![10u8; 50];
/// samples.extend([200u8; 50]);
/// let t = otsu_threshold(&samples).unwrap();
/// assert!(t > 10 && t < 200);
/// ```
pub fn otsu_threshold(samples: &[u8]) -> ThresholdResult<u16> {
    let hist = Histogram::from_samples(samples)?;
    Ok(otsu_threshold_from_histogram(&hist))
}

/// Compute Otsu's threshold from a prebuilt histogram.
///
/// When a run of consecutive levels shares the maximal variance (the
/// empty bins between two clusters), the middle of the run is returned.
/// A single-level histogram has no candidates and yields its only value.
pub fn otsu_threshold_from_histogram(hist: &Histogram) -> u16 {
    let counts = hist.counts();
    let total = hist.total() as f64;
    let sum: f64 = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut alpha = 0.0f64;
    let mut beta = 0.0f64;
    let mut max_sigma = -1.0f64;
    let mut best_start = 0usize;
    let mut best_end = 0usize;

    for (i, &count) in counts.iter().enumerate().take(counts.len() - 1) {
        alpha += i as f64 * count as f64;
        beta += count as f64;

        // Degenerate split: one class is empty and its mean is undefined.
        if beta == 0.0 || beta == total {
            continue;
        }

        let w1 = beta / total;
        let a = alpha / beta - (sum - alpha) / (total - beta);
        let sigma = w1 * (1.0 - w1) * a * a;

        if sigma > max_sigma {
            max_sigma = sigma;
            best_start = i;
            best_end = i;
        } else if sigma == max_sigma && best_end + 1 == i {
            // An empty bin leaves alpha and beta untouched, so sigma is
            // recomputed from identical operands and compares exactly equal.
            best_end = i;
        }
    }

    ((best_start + best_end) / 2) as u16 + hist.min() as u16
}

/// Compute a global Otsu threshold over every pixel of an image.
pub fn otsu_threshold_image(img: &ImageBuffer) -> ThresholdResult<u16> {
    otsu_threshold(img.data())
}

/// Compute an Otsu threshold over one rectangular tile of an image.
///
/// The region is clipped to the image first.
///
/// # Errors
///
/// Returns [`crate::ThresholdError::EmptyRegion`] if the clipped region
/// contains no pixels.
pub fn otsu_threshold_region(img: &ImageBuffer, region: Region) -> ThresholdResult<u16> {
    let samples = img.region_samples(region);
    otsu_threshold(&samples)
}
