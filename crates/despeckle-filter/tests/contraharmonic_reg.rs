//! Contraharmonic mean regression test
//!
//! The order +1 contraharmonic mean removes dark impulses, the reciprocal
//! (harmonic) mean suppresses bright ones, and for strictly positive
//! channels harmonic <= arithmetic <= contraharmonic at every pixel.

use despeckle_core::{Pix, Pixel, PixelBuffer, PixelDepth};
use despeckle_filter::{FilterKind, apply_filter, convolve, convolve_rows};
use despeckle_test::{
    RegParams, add_pepper_noise, add_salt_noise, count_rgb, gradient_image, uniform_image,
};

/// Raise every zero channel to 1 so the three means are comparable
fn lift_zeros(buf: &PixelBuffer) -> PixelBuffer {
    let rows = buf
        .rows()
        .map(|row| {
            row.iter()
                .map(|p| Pixel::opaque(p.r.max(1), p.g.max(1), p.b.max(1)))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    PixelBuffer::from_rows(rows).expect("rows")
}

#[test]
fn contraharmonic_reg() {
    let mut rp = RegParams::new("contraharmonic");

    // --- Test 1: black dot on white ---
    let mut dot = PixelBuffer::filled(3, 3, Pixel::WHITE).expect("white");
    dot.set(1, 1, Pixel::BLACK).expect("set");

    let mean = convolve(&dot, FilterKind::Arithmetic, 3).expect("arithmetic");
    let black = convolve(&dot, FilterKind::ContraharmonicBlack, 3).expect("black");
    let white = convolve(&dot, FilterKind::ContraharmonicWhite, 3).expect("white");
    let c_mean = mean.get(1, 1).expect("center").r;
    let c_black = black.get(1, 1).expect("center").r;
    let c_white = white.get(1, 1).expect("center").r;
    eprintln!(
        "  center: arithmetic {}, contraharmonic black {}, contraharmonic white {}",
        c_mean, c_black, c_white
    );
    rp.compare_values(226.0, c_mean as f64, 0.0);
    rp.compare_values(255.0, c_black as f64, 0.0);
    // 9 / (8/255 + 1/3), with 1/3 standing in for the zero reciprocal
    rp.compare_values(24.0, c_white as f64, 0.0);
    // Pepper removal restores the whole image
    rp.compare_buffers(&PixelBuffer::filled(3, 3, Pixel::WHITE).expect("white"), &black);

    // --- Test 2: pepper noise is removed exactly ---
    let clean = uniform_image(40, 24, 128).expect("uniform");
    let peppered = add_pepper_noise(&clean, 0.05, 3).expect("pepper");
    let pepper_count = count_rgb(&peppered, Pixel::BLACK);
    eprintln!("  pepper pixels: {}", pepper_count);
    rp.compare_values(1.0, if pepper_count > 0 { 1.0 } else { 0.0 }, 0.0);
    let restored = convolve(&peppered, FilterKind::ContraharmonicBlack, 3).expect("black");
    rp.compare_values(0.0, count_rgb(&restored, Pixel::BLACK) as f64, 0.0);
    rp.compare_buffers(&clean, &restored);
    rp.write_buffer(&peppered).expect("write peppered");
    rp.write_buffer(&restored).expect("write restored");

    // --- Test 3: salt noise is suppressed by the reciprocal mean ---
    let salted = add_salt_noise(&clean, 0.05, 5).expect("salt");
    let salt_count = count_rgb(&salted, Pixel::WHITE);
    let suppressed = convolve(&salted, FilterKind::ContraharmonicWhite, 3).expect("white");
    eprintln!("  salt pixels: {}", salt_count);
    rp.compare_values(1.0, if salt_count > 0 { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, count_rgb(&suppressed, Pixel::WHITE) as f64, 0.0);
    let red_sum = |buf: &PixelBuffer| buf.pixels().iter().map(|p| p.r as u64).sum::<u64>();
    let (noisy_sum, filtered_sum) = (red_sum(&salted), red_sum(&suppressed));
    eprintln!("  red sum: noisy {}, filtered {}", noisy_sum, filtered_sum);
    rp.compare_values(1.0, if filtered_sum < noisy_sum { 1.0 } else { 0.0 }, 0.0);
    rp.write_buffer(&suppressed).expect("write suppressed");

    // --- Test 4: harmonic <= arithmetic <= contraharmonic ---
    let grad = lift_zeros(&gradient_image(23, 19).expect("gradient"));
    let grad = add_salt_noise(&grad, 0.1, 17).expect("salt");
    for &mask in &[3u32, 5] {
        let h = convolve(&grad, FilterKind::ContraharmonicWhite, mask).expect("white");
        let a = convolve(&grad, FilterKind::Arithmetic, mask).expect("arithmetic");
        let c = convolve(&grad, FilterKind::ContraharmonicBlack, mask).expect("black");
        let ordered = h
            .pixels()
            .iter()
            .zip(a.pixels())
            .zip(c.pixels())
            .all(|((h, a), c)| {
                (0..3).all(|i| h.rgb()[i] <= a.rgb()[i] && a.rgb()[i] <= c.rgb()[i])
            });
        rp.compare_values(1.0, if ordered { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 5: a zero channel never fails the reciprocal mean ---
    // corner window: 4 / (4 * 1/3)
    let dark = PixelBuffer::filled(4, 4, Pixel::BLACK).expect("black");
    let out = convolve(&dark, FilterKind::ContraharmonicWhite, 3).expect("white");
    rp.compare_values(3.0, out.get(0, 0).expect("pixel").r as f64, 0.0);
    let out = convolve(&dark, FilterKind::ContraharmonicBlack, 3).expect("black");
    rp.compare_values(0.0, out.get(0, 0).expect("pixel").r as f64, 0.0);

    // --- Test 6: rows and Pix entry points agree with the buffer path ---
    let rows = dot.clone().into_rows();
    let from_rows = convolve_rows(&rows, FilterKind::ContraharmonicWhite, 3).expect("rows");
    rp.compare_buffers(&white, &from_rows);

    let mut pix_mut = Pix::new(3, 3, PixelDepth::Bit8).expect("pix").to_mut();
    for y in 0..3 {
        for x in 0..3 {
            pix_mut.set_pixel(x, y, 255).expect("set");
        }
    }
    pix_mut.set_pixel(1, 1, 0).expect("set");
    let pix: Pix = pix_mut.into();
    let filtered = apply_filter(&pix, FilterKind::ContraharmonicWhite, 3).expect("apply");
    let back = filtered.to_pixel_buffer().expect("extract");
    rp.compare_buffers(&white, &back);

    assert!(rp.cleanup(), "contraharmonic regression test failed");
}
