//! despeckle - Neighborhood mean filters for images
//!
//! Removes impulse noise from images with one of three windowed means:
//!
//! - Arithmetic mean (general smoothing)
//! - Contraharmonic mean of order +1 (removes pepper noise)
//! - Count over reciprocal sum (removes salt noise)
//!
//! The [`pipeline`] reads an image, filters it and writes the result, driven
//! by a JSON [`config`].
//!
//! # Example
//!
//! ```
//! use despeckle::{FilterKind, Pixel, PixelBuffer, filter};
//!
//! let mut buf = PixelBuffer::filled(3, 3, Pixel::WHITE).unwrap();
//! buf.set(1, 1, Pixel::BLACK).unwrap();
//! let out = filter::convolve(&buf, FilterKind::ContraharmonicBlack, 3).unwrap();
//! assert_eq!(out.get(1, 1), Some(Pixel::WHITE));
//! ```

pub mod config;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use despeckle_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use despeckle_filter as filter;
pub use despeckle_io as io;

pub use despeckle_filter::FilterKind;
