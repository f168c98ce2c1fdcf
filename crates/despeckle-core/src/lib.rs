//! despeckle-core - Basic data structures for neighborhood filtering
//!
//! This crate provides the data structures shared by the despeckle crates:
//!
//! - [`Pixel`] - One RGBA sample with 8-bit channels
//! - [`PixelBuffer`] - Rectangular, row-major grid of pixels consumed and
//!   produced by the filters
//! - [`Pix`] / [`PixMut`] - Packed image container (immutable / mutable)
//!   used by image I/O
//!
//! `Pix::to_pixel_buffer` and `Pix::from_pixel_buffer` convert between the
//! two representations.

pub mod buffer;
pub mod error;
pub mod pix;
pub mod pixel;

pub use buffer::{PixelBuffer, check_rows};
pub use error::{Error, Result};
pub use pix::{ImageFormat, Pix, PixMut, PixelDepth};
pub use pixel::Pixel;

/// Packing of RGBA channels into the 32 bpp words stored by [`Pix`].
///
/// A word reads `0xRRGGBBAA`: red in the high byte, alpha in the low byte.
/// PNG, JPEG and PNM codecs go through these helpers so every format agrees
/// on the layout.
pub mod color {
    /// Pack opaque RGB into a word.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_be_bytes([r, g, b, a])
    }

    /// Unpack a word, dropping alpha.
    #[inline]
    pub fn extract_rgb(word: u32) -> (u8, u8, u8) {
        let (r, g, b, _) = extract_rgba(word);
        (r, g, b)
    }

    #[inline]
    pub fn extract_rgba(word: u32) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = word.to_be_bytes();
        (r, g, b, a)
    }

}
