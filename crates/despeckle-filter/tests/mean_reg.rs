//! Arithmetic mean regression test
//!
//! Identity at mask 1, fixed point on uniform images, window sample counts
//! at borders, and noise reduction on a synthetic impulse-noise image.

use despeckle_core::{Pixel, PixelBuffer};
use despeckle_filter::{FilterKind, convolve, window_sample_count};
use despeckle_test::{RegParams, add_pepper_noise, add_salt_noise, gradient_image, uniform_image};

/// Mean absolute per-channel difference between two equally sized buffers
fn mean_abs_error(a: &PixelBuffer, b: &PixelBuffer) -> f64 {
    let total: u64 = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(p, q)| {
            p.rgb()
                .iter()
                .zip(q.rgb().iter())
                .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs() as u64)
                .sum::<u64>()
        })
        .sum();
    total as f64 / (a.pixels().len() * 3) as f64
}

#[test]
fn mean_reg() {
    let mut rp = RegParams::new("mean");

    let grad = gradient_image(17, 11).expect("gradient");

    // --- Test 1: mask 1 is the identity ---
    let out = convolve(&grad, FilterKind::Arithmetic, 1).expect("mask 1");
    rp.compare_buffers(&grad, &out);

    // --- Test 2: dimensions are preserved ---
    for &mask in &[1u32, 2, 3, 5, 9, 31] {
        let out = convolve(&grad, FilterKind::Arithmetic, mask).expect("convolve");
        rp.compare_values(17.0, out.width() as f64, 0.0);
        rp.compare_values(11.0, out.height() as f64, 0.0);
        eprintln!("  mask {}: {}x{}", mask, out.width(), out.height());
    }

    // --- Test 3: uniform images are fixed points for every kind ---
    let flat = uniform_image(9, 7, 128).expect("uniform");
    for kind in FilterKind::ALL {
        for &mask in &[3u32, 5, 7] {
            let out = convolve(&flat, kind, mask).expect("convolve");
            rp.compare_buffers(&flat, &out);
        }
    }

    // --- Test 4: border windows hold fewer samples ---
    rp.compare_values(4.0, window_sample_count(0, 0, 17, 11, 3) as f64, 0.0);
    rp.compare_values(6.0, window_sample_count(5, 0, 17, 11, 3) as f64, 0.0);
    rp.compare_values(9.0, window_sample_count(5, 5, 17, 11, 3) as f64, 0.0);
    rp.compare_values(9.0, window_sample_count(0, 0, 17, 11, 5) as f64, 0.0);
    rp.compare_values(25.0, window_sample_count(8, 5, 17, 11, 5) as f64, 0.0);

    // --- Test 5: all-white 3x3 stays white ---
    let white = PixelBuffer::filled(3, 3, Pixel::WHITE).expect("white");
    let out = convolve(&white, FilterKind::Arithmetic, 3).expect("convolve");
    rp.compare_buffers(&white, &out);

    // --- Test 6: black center pulls the center down to 8 * 255 / 9 ---
    let mut dot = white.clone();
    dot.set(1, 1, Pixel::BLACK).expect("set");
    let out = convolve(&dot, FilterKind::Arithmetic, 3).expect("convolve");
    let center = out.get(1, 1).expect("center");
    rp.compare_values(226.0, center.r as f64, 0.0);
    rp.compare_values(255.0, center.a as f64, 0.0);
    // corner: 3 white + 1 black over 4 samples
    rp.compare_values(191.0, out.get(0, 0).expect("corner").r as f64, 0.0);

    // --- Test 7: smoothing reduces impulse noise ---
    let clean = uniform_image(48, 32, 128).expect("uniform");
    let noisy = add_salt_noise(&clean, 0.05, 11).expect("salt");
    let noisy = add_pepper_noise(&noisy, 0.05, 29).expect("pepper");
    let smoothed = convolve(&noisy, FilterKind::Arithmetic, 3).expect("convolve");
    let before = mean_abs_error(&clean, &noisy);
    let after = mean_abs_error(&clean, &smoothed);
    eprintln!("  mean abs error: noisy {:.2}, smoothed {:.2}", before, after);
    rp.compare_values(1.0, if after < before { 1.0 } else { 0.0 }, 0.0);
    rp.write_buffer(&noisy).expect("write noisy");
    rp.write_buffer(&smoothed).expect("write smoothed");

    // --- Test 8: filtering twice is not filtering once ---
    let once = convolve(&noisy, FilterKind::Arithmetic, 3).expect("once");
    let twice = convolve(&once, FilterKind::Arithmetic, 3).expect("twice");
    rp.compare_values(1.0, if once != twice { 1.0 } else { 0.0 }, 0.0);

    // --- Test 9: masks beyond the image cost no more than the image ---
    let small = gradient_image(5, 4).expect("gradient");
    let start = std::time::Instant::now();
    let huge = convolve(&small, FilterKind::ContraharmonicBlack, u32::MAX).expect("huge mask");
    let elapsed = start.elapsed();
    eprintln!("  mask u32::MAX on 5x4: {:?}", elapsed);
    let covering = convolve(&small, FilterKind::ContraharmonicBlack, 11).expect("covering mask");
    rp.compare_buffers(&covering, &huge);
    rp.compare_values(20.0, window_sample_count(0, 0, 5, 4, u32::MAX) as f64, 0.0);
    rp.compare_values(1.0, if elapsed.as_secs() < 1 { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "mean regression test failed");
}
