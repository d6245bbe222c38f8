//! Shifted intensity histogram
//!
//! Only the observed range `[min, max]` is stored: bin `i` counts samples
//! equal to `min + i`, so the histogram has `max - min + 1` bins.

use crate::{ThresholdError, ThresholdResult};

/// Level counts over the observed intensity range of a sample set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    min: u8,
    max: u8,
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Build a histogram from a flat list of samples.
    ///
    /// # Errors
    ///
    /// - [`ThresholdError::EmptyRegion`] if `samples` is empty
    /// - [`ThresholdError::AllocationFailed`] if the bins cannot be allocated
    pub fn from_samples(samples: &[u8]) -> ThresholdResult<Self> {
        let (&first, rest) = samples.split_first().ok_or(ThresholdError::EmptyRegion)?;
        let (min, max) = rest
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let levels = (max - min) as usize + 1;
        let mut counts: Vec<u64> = Vec::new();
        counts
            .try_reserve_exact(levels)
            .map_err(|_| ThresholdError::AllocationFailed { levels })?;
        counts.resize(levels, 0);

        for &v in samples {
            counts[(v - min) as usize] += 1;
        }

        Ok(Self {
            min,
            max,
            counts,
            total: samples.len() as u64,
        })
    }

    /// Smallest observed sample.
    #[inline]
    pub fn min(&self) -> u8 {
        self.min
    }

    /// Largest observed sample.
    #[inline]
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Number of bins (`max - min + 1`).
    #[inline]
    pub fn levels(&self) -> usize {
        self.counts.len()
    }

    /// Count per shifted level.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of samples.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count of samples equal to `value`; zero outside `[min, max]`.
    pub fn count_of(&self, value: u8) -> u64 {
        if value < self.min || value > self.max {
            return 0;
        }
        self.counts[(value - self.min) as usize]
    }
}
