//! PixelBuffer - a rectangular grid of unpacked pixels
//!
//! `PixelBuffer` is the exchange format between pixel extraction, the
//! neighborhood filters and image reconstruction. It is row-major (y first,
//! then x) and always rectangular and non-empty: every constructor rejects
//! zero dimensions and ragged rows, so code holding a `PixelBuffer` never
//! needs to re-check its shape.

use crate::Pixel;
use crate::error::{Error, Result};

/// Rectangular, row-major grid of [`Pixel`].
///
/// # Examples
///
/// ```
/// use despeckle_core::{Pixel, PixelBuffer};
///
/// let buf = PixelBuffer::from_rows(vec![
///     vec![Pixel::WHITE, Pixel::BLACK],
///     vec![Pixel::BLACK, Pixel::WHITE],
/// ])
/// .unwrap();
/// assert_eq!(buf.width(), 2);
/// assert_eq!(buf.get(1, 0), Some(Pixel::BLACK));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to [`Pixel::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Pixel::ZERO)
    }

    /// Create a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![pixel; (width as usize) * (height as usize)];
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Wrap flat row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from nested rows (`rows[y][x]`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if there are no rows or the first row is
    /// empty, and [`Error::RaggedRows`] if any row differs in length from the
    /// first one.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let width = check_rows(&rows)?;
        let height = rows.len();
        let data: Vec<Pixel> = rows.into_iter().flatten().collect();
        Self::from_vec(dim(width)?, dim(height)?, data)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get the pixel at (x, y) without returning an `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = pixel;
        Ok(())
    }

    /// Borrow row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        let start = self.index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Convert back to nested rows (`rows[y][x]`).
    pub fn into_rows(self) -> Vec<Vec<Pixel>> {
        self.data
            .chunks_exact(self.width as usize)
            .map(<[Pixel]>::to_vec)
            .collect()
    }
}

/// Validate nested rows and return the common row width.
///
/// Used by [`PixelBuffer::from_rows`] and by callers that work on borrowed
/// rows and must reject malformed input before reading any pixel.
///
/// # Errors
///
/// [`Error::EmptyBuffer`] or [`Error::RaggedRows`].
pub fn check_rows<R: AsRef<[Pixel]>>(rows: &[R]) -> Result<usize> {
    let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
    if width == 0 {
        return Err(Error::EmptyBuffer);
    }
    for (row, r) in rows.iter().enumerate() {
        let actual = r.as_ref().len();
        if actual != width {
            return Err(Error::RaggedRows {
                row,
                expected: width,
                actual,
            });
        }
    }
    Ok(width)
}

fn dim(n: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| Error::InvalidParameter(format!("dimension {n} exceeds u32")))
}
