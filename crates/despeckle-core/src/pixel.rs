//! Pixel - a single RGBA sample
//!
//! The unit of the [`PixelBuffer`](crate::PixelBuffer) grid. Channels are
//! stored unpacked so that filters can read them without bit twiddling;
//! [`Pixel::from_packed`] and [`Pixel::to_packed`] convert to and from the
//! 32-bit `0xRRGGBBAA` words held by [`Pix`](crate::Pix).

use crate::color;

/// One RGBA pixel with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the zero value.
    pub const ZERO: Pixel = Pixel::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Pixel = Pixel::opaque(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Pixel = Pixel::opaque(255, 255, 255);

    /// Create a pixel from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Pixel { r, g, b, a }
    }

    /// Create an opaque pixel (alpha = 255).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b, a: 255 }
    }

    /// Create an opaque gray pixel.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Pixel::opaque(v, v, v)
    }

    /// Unpack a 32-bit `0xRRGGBBAA` word.
    #[inline]
    pub fn from_packed(word: u32) -> Self {
        let (r, g, b, a) = color::extract_rgba(word);
        Pixel { r, g, b, a }
    }

    /// Pack into a 32-bit `0xRRGGBBAA` word.
    #[inline]
    pub fn to_packed(self) -> u32 {
        color::compose_rgba(self.r, self.g, self.b, self.a)
    }

    /// The color channels as an array, in R, G, B order.
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build an opaque pixel from R, G, B channel values.
    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Pixel::opaque(rgb[0], rgb[1], rgb[2])
    }

    /// The same color with alpha replaced.
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Pixel { a, ..self }
    }
}

impl From<(u8, u8, u8, u8)> for Pixel {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Pixel { r, g, b, a }
    }
}

impl From<Pixel> for (u8, u8, u8, u8) {
    fn from(p: Pixel) -> Self {
        (p.r, p.g, p.b, p.a)
    }
}
