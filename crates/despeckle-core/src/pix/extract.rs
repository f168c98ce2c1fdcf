//! Conversion between `Pix` and `PixelBuffer`
//!
//! Filters work on unpacked [`PixelBuffer`] grids; images travel as packed
//! [`Pix`]. These two functions are the bridge: extraction reads every
//! pixel of a `Pix` into RGBA form, reconstruction builds a fresh 32 bpp
//! RGBA `Pix` by setting each pixel by coordinate.

use super::{Pix, PixelDepth};
use crate::error::Result;
use crate::{Pixel, PixelBuffer};

impl Pix {
    /// Extract all pixels as an RGBA [`PixelBuffer`].
    ///
    /// 8 bpp gray `v` becomes `(v, v, v, 255)`; 32 bpp RGB images (spp = 3)
    /// report alpha as 255.
    ///
    /// # Examples
    ///
    /// ```
    /// use despeckle_core::{Pix, PixelDepth, Pixel};
    ///
    /// let pix = Pix::new(4, 3, PixelDepth::Bit8).unwrap();
    /// let buf = pix.to_pixel_buffer().unwrap();
    /// assert_eq!(buf.dimensions(), (4, 3));
    /// assert_eq!(buf.get(0, 0), Some(Pixel::BLACK));
    /// ```
    pub fn to_pixel_buffer(&self) -> Result<PixelBuffer> {
        let w = self.width();
        let h = self.height();
        let mut data = Vec::with_capacity((w as usize) * (h as usize));

        for y in 0..h {
            for x in 0..w {
                let word = self.get_pixel_unchecked(x, y);
                let pixel = match self.depth() {
                    PixelDepth::Bit8 => Pixel::gray((word & 0xff) as u8),
                    PixelDepth::Bit32 if self.spp() == 4 => Pixel::from_packed(word),
                    PixelDepth::Bit32 => Pixel::from_packed(word).with_alpha(255),
                };
                data.push(pixel);
            }
        }

        PixelBuffer::from_vec(w, h, data)
    }

    /// Build a 32 bpp RGBA image (spp = 4) from a [`PixelBuffer`].
    pub fn from_pixel_buffer(buf: &PixelBuffer) -> Result<Pix> {
        let (w, h) = buf.dimensions();
        let mut pix_mut = Pix::new(w, h, PixelDepth::Bit32)?.to_mut();
        pix_mut.set_spp(4)?;

        for (y, row) in (0u32..).zip(buf.rows()) {
            for (x, p) in (0u32..).zip(row) {
                pix_mut.set_rgba(x, y, p.r, p.g, p.b, p.a)?;
            }
        }

        Ok(pix_mut.into())
    }
}
