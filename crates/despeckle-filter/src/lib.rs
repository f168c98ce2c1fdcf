//! despeckle-filter - Neighborhood mean filters
//!
//! This crate replaces every pixel by a statistic over its square
//! neighborhood:
//!
//! - Arithmetic mean (general smoothing)
//! - Contraharmonic mean of order +1 (removes dark pepper noise)
//! - Count over reciprocal sum (removes bright salt noise)
//!
//! The filter kind is a closed enum; text tokens are validated when parsed.

pub mod convolve;
mod error;
pub mod kind;

pub use error::{FilterError, FilterResult};
pub use kind::FilterKind;

// Re-export commonly used functions
pub use convolve::{ZERO_RECIPROCAL, apply_filter, convolve, convolve_rows, window_sample_count};
