//! Pixel access functions
//!
//! Getting and setting individual pixels of a [`Pix`] / [`PixMut`].
//! Each stored word is one pixel, so access is a single index computation.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

#[inline]
fn word_index(width: u32, x: u32, y: u32) -> usize {
    (y as usize) * (width as usize) + (x as usize)
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without an `Option` wrapper.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[word_index(self.width(), x, y)]
    }

    /// Get RGB values at (x, y).
    ///
    /// Gray images report the gray value in all three channels.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_rgba(x, y).map(|(r, g, b, _)| (r, g, b))
    }

    /// Get RGBA values at (x, y).
    ///
    /// Alpha reads as 255 unless the image is 32 bpp with spp = 4.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        let val = self.get_pixel(x, y)?;
        Some(match self.depth() {
            PixelDepth::Bit8 => {
                let v = (val & 0xff) as u8;
                (v, v, v, 255)
            }
            PixelDepth::Bit32 => {
                let (r, g, b, a) = color::extract_rgba(val);
                (r, g, b, if self.spp() == 4 { a } else { 255 })
            }
        })
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[word_index(self.width(), x, y)])
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(word_index(self.width(), x, y))
    }

    /// Set a pixel value at (x, y).
    ///
    /// 8 bpp values are masked to the low byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let idx = self.check_bounds(x, y)?;
        let val = match self.depth() {
            PixelDepth::Bit8 => val & 0xff,
            PixelDepth::Bit32 => val,
        };
        self.data_mut()[idx] = val;
        Ok(())
    }

    /// Set a pixel value without returning a `Result`.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = word_index(self.width(), x, y);
        self.data_mut()[idx] = val;
    }

    /// Set an RGB pixel at (x, y) with alpha 255.
    ///
    /// Only valid for 32-bit images.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_rgba(x, y, r, g, b, 255)
    }

    /// Set an RGBA pixel at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let idx = self.check_bounds(x, y)?;
        self.data_mut()[idx] = color::compose_rgba(r, g, b, a);
        Ok(())
    }
}
