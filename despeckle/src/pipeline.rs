//! The fixed despeckling pipeline
//!
//! Stage order is median, binarize, erode, median, dilate. Only the
//! parameters of each stage are configurable.

use crate::{PipelineError, PipelineResult};
use despeckle_core::{ImageBuffer, Window};
use despeckle_filter::median_filter;
use despeckle_io::{ImageFormat, read_image, write_image};
use despeckle_morph::{MorphOp, ScanBounds, StructuringMask, morph_step};
use despeckle_threshold::{ThresholdSource, binarize_with};
use std::path::Path;

/// Binarization thresholds for presets 1 through 5.
pub const PRESET_THRESHOLDS: [u16; 5] = [215, 215, 210, 200, 190];

/// Threshold of a 1-based preset, or `None` outside `1..=5`.
pub fn preset_threshold(id: u32) -> Option<u16> {
    let index = (id as usize).checked_sub(1)?;
    PRESET_THRESHOLDS.get(index).copied()
}

/// Parameters for every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Window of both median passes (default: 3x3)
    pub median_window: Window,
    /// Binarization threshold source (default: fixed 210)
    pub threshold: ThresholdSource,
    /// Mask of the erosion stage (default: 3x3, left column and center row)
    pub erosion_mask: StructuringMask,
    /// Mask of the dilation stage (default: 5x5 with corners cut)
    pub dilation_mask: StructuringMask,
    /// Stamp center policy of both morphology stages (default: lower margin only)
    pub scan_bounds: ScanBounds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            median_window: Window::default(),
            threshold: ThresholdSource::default(),
            erosion_mask: StructuringMask::pipeline_erosion(),
            dilation_mask: StructuringMask::pipeline_dilation(),
            scan_bounds: ScanBounds::default(),
        }
    }
}

impl PipelineConfig {
    /// Default configuration with the fixed threshold of preset `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnknownPreset`] if `id` is not in `1..=5`.
    pub fn for_preset(id: u32) -> PipelineResult<Self> {
        let threshold = preset_threshold(id).ok_or(PipelineError::UnknownPreset {
            id,
            max: PRESET_THRESHOLDS.len(),
        })?;
        Ok(Self::default().with_threshold(ThresholdSource::Fixed(threshold)))
    }

    /// Replace the window of both median passes.
    pub fn with_median_window(mut self, window: Window) -> Self {
        self.median_window = window;
        self
    }

    /// Replace the binarization threshold source.
    pub fn with_threshold(mut self, threshold: ThresholdSource) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the erosion mask.
    pub fn with_erosion_mask(mut self, mask: StructuringMask) -> Self {
        self.erosion_mask = mask;
        self
    }

    /// Replace the dilation mask.
    pub fn with_dilation_mask(mut self, mask: StructuringMask) -> Self {
        self.dilation_mask = mask;
        self
    }

    /// Replace the stamp center policy of both morphology stages.
    pub fn with_scan_bounds(mut self, bounds: ScanBounds) -> Self {
        self.scan_bounds = bounds;
        self
    }
}

/// Output of every stage of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineStages {
    /// After the first median pass
    pub filtered: ImageBuffer,
    /// After binarization
    pub binary: ImageBuffer,
    /// After erosion
    pub eroded: ImageBuffer,
    /// After the second median pass
    pub smoothed: ImageBuffer,
    /// After dilation; the pipeline result
    pub output: ImageBuffer,
}

/// Configured pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given stage parameters.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Stage parameters.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run all stages and return the final image. The input is not modified.
    pub fn run(&self, img: &ImageBuffer) -> PipelineResult<ImageBuffer> {
        Ok(self.run_stages(img)?.output)
    }

    /// Run all stages and keep every intermediate image.
    pub fn run_stages(&self, img: &ImageBuffer) -> PipelineResult<PipelineStages> {
        let cfg = &self.config;
        let (w, h) = img.dimensions();
        let window = cfg.median_window;

        log::debug!(
            "median {}x{} on {}x{} image",
            window.width(),
            window.height(),
            w,
            h
        );
        let filtered = median_filter(img, window)?;

        log::debug!("binarize with {:?}", cfg.threshold);
        let binary = binarize_with(&filtered, &cfg.threshold)?;

        log::debug!("erode with {}x{} mask", cfg.erosion_mask.size(), cfg.erosion_mask.size());
        let eroded = morph_step(&binary, &cfg.erosion_mask, MorphOp::Erode, cfg.scan_bounds)?;

        log::debug!("median {}x{} on eroded image", window.width(), window.height());
        let smoothed = median_filter(&eroded, window)?;

        log::debug!("dilate with {}x{} mask", cfg.dilation_mask.size(), cfg.dilation_mask.size());
        let output = morph_step(&smoothed, &cfg.dilation_mask, MorphOp::Dilate, cfg.scan_bounds)?;

        Ok(PipelineStages {
            filtered,
            binary,
            eroded,
            smoothed,
            output,
        })
    }

    /// Read `input`, run the pipeline and write the result to `output`.
    ///
    /// The output format follows the extension of `output`.
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> PipelineResult<ImageBuffer> {
        let img = read_image(input)?;
        let result = self.run(&img)?;
        write_image(&result, output, ImageFormat::Unknown)?;
        Ok(result)
    }
}
