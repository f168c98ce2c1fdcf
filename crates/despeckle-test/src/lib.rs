//! despeckle-test - Regression test framework for the despeckle filters
//!
//! Provides [`RegParams`], which runs a numbered sequence of checks and
//! collects failures instead of panicking, and a few synthetic test images
//! (gradients and impulse noise) so that regression tests need no data
//! files.
//!
//! # Usage
//!
//! ```ignore
//! use despeckle_test::RegParams;
//!
//! let mut rp = RegParams::new("mean");
//! rp.compare_values(226.0, center.r as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display". Display mode also
//!   writes result images to `tests/regout` for visual inspection.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use despeckle_core::{Pixel, PixelBuffer};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // despeckle-test is at crates/despeckle-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Smooth RGB test image
///
/// Red rises along x, green along y, blue along the diagonal. Alpha is 255.
pub fn gradient_image(width: u32, height: u32) -> TestResult<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    let wmax = width.saturating_sub(1).max(1);
    let hmax = height.saturating_sub(1).max(1);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / wmax) as u8;
            let g = (y * 255 / hmax) as u8;
            let b = ((x + y) * 255 / (wmax + hmax)) as u8;
            buf.set(x, y, Pixel::opaque(r, g, b))?;
        }
    }
    Ok(buf)
}

/// Uniform opaque gray test image
pub fn uniform_image(width: u32, height: u32, value: u8) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::filled(width, height, Pixel::gray(value))?)
}

/// Replace roughly `fraction` of the pixels with white impulses
///
/// Positions come from a seeded linear congruential generator, so the
/// same seed always yields the same noise.
pub fn add_salt_noise(buf: &PixelBuffer, fraction: f64, seed: u32) -> TestResult<PixelBuffer> {
    add_impulse_noise(buf, fraction, seed, Pixel::WHITE)
}

/// Replace roughly `fraction` of the pixels with black impulses
pub fn add_pepper_noise(buf: &PixelBuffer, fraction: f64, seed: u32) -> TestResult<PixelBuffer> {
    add_impulse_noise(buf, fraction, seed, Pixel::BLACK)
}

fn add_impulse_noise(
    buf: &PixelBuffer,
    fraction: f64,
    seed: u32,
    impulse: Pixel,
) -> TestResult<PixelBuffer> {
    let mut out = buf.clone();
    let threshold = (fraction.clamp(0.0, 1.0) * 65536.0) as u32;
    let mut state = seed;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            if (state >> 16) < threshold {
                out.set(x, y, impulse)?;
            }
        }
    }
    Ok(out)
}

/// Count pixels whose RGB equals that of `pixel`
pub fn count_rgb(buf: &PixelBuffer, pixel: Pixel) -> usize {
    buf.pixels()
        .iter()
        .filter(|p| p.rgb() == pixel.rgb())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_corners() {
        let buf = gradient_image(5, 5).unwrap();
        assert_eq!(buf.get(0, 0), Some(Pixel::opaque(0, 0, 0)));
        assert_eq!(buf.get(4, 4), Some(Pixel::opaque(255, 255, 255)));
        assert_eq!(buf.get(4, 0), Some(Pixel::opaque(255, 0, 127)));
    }

    #[test]
    fn test_noise_is_deterministic() {
        let base = uniform_image(32, 32, 128).unwrap();
        let a = add_salt_noise(&base, 0.1, 7).unwrap();
        let b = add_salt_noise(&base, 0.1, 7).unwrap();
        assert_eq!(a, b);

        let salt = count_rgb(&a, Pixel::WHITE);
        assert!(salt > 40 && salt < 180, "salt count {}", salt);

        let none = add_pepper_noise(&base, 0.0, 7).unwrap();
        assert_eq!(count_rgb(&none, Pixel::BLACK), 0);
        let all = add_pepper_noise(&base, 1.0, 7).unwrap();
        assert_eq!(count_rgb(&all, Pixel::BLACK), 32 * 32);
    }
}
