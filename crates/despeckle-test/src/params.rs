//! Regression test parameters and checks

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use despeckle_core::ImageBuffer;
use despeckle_io::ImageFormat;
use std::fs;
use std::path::PathBuf;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Checks only
    #[default]
    Compare,
    /// Checks, plus every image passed to [`RegParams::write_image`] is
    /// saved as PNG under `tests/regout/`
    Display,
}

impl RegTestMode {
    /// Read the mode from `REGTEST_MODE` (`display` or anything else).
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// State of one regression test.
///
/// Every check bumps a running index so a failure message points at the
/// exact check. Failures are collected instead of panicking; the test
/// asserts on [`RegParams::cleanup`] at the end.
pub struct RegParams {
    /// Test name, used in messages and output file names
    pub test_name: String,
    /// Test mode
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a regression test. The mode comes from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        eprintln!();
        eprintln!("==== {}_reg ({:?}) ====", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Index of the last check performed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether images are being written out.
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn next_check(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    fn fail(&mut self, detail: String) {
        let msg = format!("{}_reg check {}: {}", self.test_name, self.index, detail);
        eprintln!("  FAIL {}", msg);
        self.failures.push(msg);
    }

    /// Compare two numbers, allowing an absolute difference of `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.next_check();
        let diff = (expected - actual).abs();
        if diff <= delta {
            return true;
        }
        self.fail(format!(
            "expected {}, got {} (difference {} > {})",
            expected, actual, diff, delta
        ));
        false
    }

    /// Record a boolean condition described by `what`.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.next_check();
        if !condition {
            self.fail(what.to_string());
        }
        condition
    }

    /// Require two images to be identical. Reports the first differing
    /// pixel.
    pub fn compare_images(&mut self, expected: &ImageBuffer, actual: &ImageBuffer) -> bool {
        self.next_check();

        if expected.dimensions() != actual.dimensions() {
            self.fail(format!(
                "size mismatch: expected {}x{}, got {}x{}",
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }

        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);
        match mismatch {
            None => true,
            Some(i) => {
                let w = expected.width() as usize;
                let (x, y) = (i % w, i / w);
                let differing = expected
                    .data()
                    .iter()
                    .zip(actual.data())
                    .filter(|(a, b)| a != b)
                    .count();
                self.fail(format!(
                    "{} pixels differ, first at ({}, {}): expected {}, got {}",
                    differing,
                    x,
                    y,
                    expected.data()[i],
                    actual.data()[i]
                ));
                false
            }
        }
    }

    /// Save `img` as `tests/regout/<test>.<label>.png` in display mode.
    /// Compare mode writes nothing.
    pub fn write_image(&mut self, img: &ImageBuffer, label: &str) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }
        let dir = PathBuf::from(regout_dir());
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!(
            "{}.{}.{}",
            self.test_name,
            label,
            ImageFormat::Png.extension()
        ));
        despeckle_io::write_image(img, &path, ImageFormat::Png).map_err(|e| {
            TestError::ImageWrite {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;
        eprintln!("  wrote {}", path.display());
        Ok(())
    }

    /// Print a summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        let ok = self.failures.is_empty();
        if ok {
            eprintln!("{}_reg: {} checks passed", self.test_name, self.index);
        } else {
            eprintln!(
                "{}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();
        ok
    }

    /// Whether every check so far has passed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure messages recorded so far.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
