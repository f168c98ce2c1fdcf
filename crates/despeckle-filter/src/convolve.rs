//! Neighborhood mean filters
//!
//! Every output pixel is a per-channel statistic over the square window of
//! side `mask_size` centred on it. The half-extent is `mask_size / 2`
//! (truncating), so an even mask behaves like the next odd one.
//!
//! Window positions that fall outside the image are skipped, not padded:
//! near edges and corners fewer samples contribute and the divisor shrinks
//! with them. Output alpha is always 255.

use crate::{FilterError, FilterKind, FilterResult};
use despeckle_core::{Pix, Pixel, PixelBuffer, check_rows};

/// Reciprocal used in place of `1/0` for zero channels in
/// [`FilterKind::ContraharmonicWhite`].
pub const ZERO_RECIPROCAL: f64 = 1.0 / 3.0;

/// Apply a neighborhood filter to a pixel buffer.
///
/// Returns a new buffer of the same dimensions; the input is not modified.
///
/// # Arguments
/// * `pixels` - Input pixels
/// * `kind` - Statistic to compute over each window
/// * `mask_size` - Side of the square window (odd by convention)
///
/// # Errors
///
/// [`FilterError::InvalidInput`] if `mask_size` is 0.
///
/// # Examples
///
/// ```
/// use despeckle_core::{Pixel, PixelBuffer};
/// use despeckle_filter::{FilterKind, convolve};
///
/// let buf = PixelBuffer::filled(3, 3, Pixel::WHITE).unwrap();
/// let out = convolve(&buf, FilterKind::Arithmetic, 3).unwrap();
/// assert!(out.pixels().iter().all(|&p| p == Pixel::WHITE));
/// ```
pub fn convolve(
    pixels: &PixelBuffer,
    kind: FilterKind,
    mask_size: u32,
) -> FilterResult<PixelBuffer> {
    let (w, h) = pixels.dimensions();
    convolve_with(w, h, kind, mask_size, |x, y| pixels.get_unchecked(x, y))
}

/// Apply a neighborhood filter to nested rows (`rows[y][x]`).
///
/// Same semantics as [`convolve`], for callers holding raw rows rather than
/// a [`PixelBuffer`].
///
/// # Errors
///
/// [`FilterError::InvalidInput`] if there are no rows, the rows are empty or
/// ragged, or `mask_size` is 0. Nothing is computed in that case.
pub fn convolve_rows(
    rows: &[Vec<Pixel>],
    kind: FilterKind,
    mask_size: u32,
) -> FilterResult<PixelBuffer> {
    let width = check_rows(rows).map_err(|e| FilterError::InvalidInput(e.to_string()))?;
    let w = u32::try_from(width)
        .map_err(|_| FilterError::InvalidInput(format!("row width {width} too large")))?;
    let h = u32::try_from(rows.len())
        .map_err(|_| FilterError::InvalidInput(format!("{} rows too many", rows.len())))?;
    convolve_with(w, h, kind, mask_size, |x, y| rows[y as usize][x as usize])
}

/// Filter a [`Pix`] and rebuild an image from the result.
///
/// Extracts the pixels, runs [`convolve`], and reconstructs a 32 bpp RGBA
/// image (spp = 4) with the same dimensions. Gray input comes back as
/// color with equal channels.
pub fn apply_filter(pix: &Pix, kind: FilterKind, mask_size: u32) -> FilterResult<Pix> {
    let pixels = pix.to_pixel_buffer()?;
    let filtered = convolve(&pixels, kind, mask_size)?;
    Ok(Pix::from_pixel_buffer(&filtered)?)
}

/// Number of in-bounds samples in the window centred at (x, y).
///
/// Equals `(2 * (mask_size / 2) + 1)^2` for interior pixels and is smaller
/// wherever the window crosses the image border.
pub fn window_sample_count(x: u32, y: u32, width: u32, height: u32, mask_size: u32) -> u64 {
    let half = mask_size / 2;
    let span = |c: u32, len: u32| -> u64 {
        let (lo, hi) = window_range(c, len, half);
        if lo > hi { 0 } else { (hi - lo) as u64 + 1 }
    };
    span(x, width) * span(y, height)
}

/// Inclusive in-bounds coordinate range of a window centred at `c`.
///
/// Empty (`lo > hi`) only when `c` itself lies outside `0..len`.
#[inline]
fn window_range(c: u32, len: u32, half: u32) -> (u32, u32) {
    let lo = c.saturating_sub(half);
    let hi = c.saturating_add(half).min(len.saturating_sub(1));
    (lo, hi)
}

fn check_mask_size(mask_size: u32) -> FilterResult<()> {
    if mask_size == 0 {
        return Err(FilterError::InvalidInput("mask size must be positive".into()));
    }
    Ok(())
}

fn convolve_with<F>(
    w: u32,
    h: u32,
    kind: FilterKind,
    mask_size: u32,
    sample: F,
) -> FilterResult<PixelBuffer>
where
    F: Fn(u32, u32) -> Pixel,
{
    check_mask_size(mask_size)?;

    let half = mask_size / 2;
    let mut out = Vec::with_capacity((w as usize) * (h as usize));

    for y in 0..h {
        let (y0, y1) = window_range(y, h, half);
        for x in 0..w {
            let (x0, x1) = window_range(x, w, half);
            let mut acc = WindowAccum::default();

            // Out-of-bounds offsets are skipped, not padded
            for sy in y0..=y1 {
                for sx in x0..=x1 {
                    acc.add(kind, sample(sx, sy));
                }
            }

            out.push(acc.finish(kind));
        }
    }

    Ok(PixelBuffer::from_vec(w, h, out)?)
}

/// Running per-channel sums for one window.
///
/// `num` / `den` hold, per kind:
/// - arithmetic: `sum(p)` / unused
/// - contraharmonic black: `sum(p^2)` / `sum(p)`
/// - contraharmonic white: sample count / `sum(1/p)`
#[derive(Debug, Default)]
struct WindowAccum {
    num: [f64; 3],
    den: [f64; 3],
    count: u32,
}

impl WindowAccum {
    #[inline]
    fn add(&mut self, kind: FilterKind, p: Pixel) {
        for (c, v) in p.rgb().into_iter().enumerate() {
            let v = v as f64;
            match kind {
                FilterKind::Arithmetic => {
                    self.num[c] += v;
                }
                FilterKind::ContraharmonicBlack => {
                    self.num[c] += v * v;
                    self.den[c] += v;
                }
                FilterKind::ContraharmonicWhite => {
                    self.num[c] += 1.0;
                    self.den[c] += if v == 0.0 { ZERO_RECIPROCAL } else { 1.0 / v };
                }
            }
        }
        self.count += 1;
    }

    fn finish(&self, kind: FilterKind) -> Pixel {
        let channel = |c: usize| match kind {
            // A mean of values in [0, 255] stays in range.
            FilterKind::Arithmetic => (self.num[c] / self.count as f64) as u8,
            FilterKind::ContraharmonicBlack | FilterKind::ContraharmonicWhite => {
                clamp_ratio(self.num[c], self.den[c])
            }
        };
        Pixel::opaque(channel(0), channel(1), channel(2))
    }
}

/// Truncate `num / den` into [0, 255].
///
/// `0 / 0` (an all-black window under the black contraharmonic) gives 0.
#[inline]
fn clamp_ratio(num: f64, den: f64) -> u8 {
    let ratio = num / den;
    if ratio.is_nan() {
        return 0;
    }
    ratio.clamp(0.0, 255.0) as u8
}
