//! despeckle-filter - Image filtering operations
//!
//! Rank (order-statistic) filtering over a rectangular [`Window`]; the
//! median filter is the rank-0.5 case and is what the pipeline uses to
//! knock out isolated speckles before and after erosion.
//!
//! [`Window`]: despeckle_core::Window

mod error;
pub mod rank;

pub use error::{FilterError, FilterResult};
pub use rank::{median_filter, median_filter_sized, rank_filter};
