//! despeckle-test - Regression test framework for despeckle
//!
//! Supports two modes, selected with the `REGTEST_MODE` environment
//! variable:
//!
//! - **Compare** (default): run checks, record failures
//! - **Display**: additionally write intermediate images to
//!   `tests/regout/` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use despeckle_test::RegParams;
//!
//! let mut rp = RegParams::new("median");
//! rp.compare_values(20.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Fixtures are synthesized in code by the [`fixtures`] module; no binary
//! test data is checked in.

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Directory receiving display-mode images: `<workspace>/tests/regout`.
pub fn regout_dir() -> String {
    // this crate lives two levels below the workspace root
    format!("{}/../../tests/regout", env!("CARGO_MANIFEST_DIR"))
}
