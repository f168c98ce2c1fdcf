//! End-to-end pipeline regression test
//!
//! Writes a noisy synthetic image, drives the pipeline from a JSON config
//! file and checks that the output file matches filtering in memory.

use despeckle::config::{RunConfig, load_config};
use despeckle::pipeline::{PipelineError, run};
use despeckle::{FilterKind, ImageFormat, Pix, filter, io};
use despeckle_test::{RegParams, add_pepper_noise, add_salt_noise, gradient_image, regout_dir};
use std::fs;
use std::path::Path;

#[test]
fn pipeline_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("pipeline");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");

    let clean = gradient_image(40, 30).expect("gradient");
    let noisy = add_salt_noise(&clean, 0.04, 1).expect("salt");
    let noisy = add_pepper_noise(&noisy, 0.04, 2).expect("pepper");
    let input = format!("{}/pipeline_input.ppm", outdir);
    io::write_image(
        &Pix::from_pixel_buffer(&noisy).expect("pix"),
        &input,
        ImageFormat::Pnm,
    )
    .expect("write input");

    // --- Test 1: each kind through a JSON config file ---
    for kind in FilterKind::ALL {
        let output = format!("{}/pipeline_{}.png", outdir, kind);
        let config_path = format!("{}/pipeline_{}.json", outdir, kind);
        let json = format!(
            r#"{{ "input": "{}", "output": "{}", "filter": {{ "kind": "{}", "mask_size": 3 }} }}"#,
            input, output, kind
        );
        fs::write(&config_path, json).expect("write config");

        let config = load_config(Path::new(&config_path)).expect("load config");
        let summary = run(&config).expect("run");
        rp.compare_values(40.0, summary.width as f64, 0.0);
        rp.compare_values(30.0, summary.height as f64, 0.0);
        rp.compare_values(
            1.0,
            if summary.input_format == ImageFormat::Pnm && summary.output_format == ImageFormat::Png
            {
                1.0
            } else {
                0.0
            },
            0.0,
        );

        let written = io::read_image(&output)
            .expect("read output")
            .to_pixel_buffer()
            .expect("extract");
        let expected = filter::convolve(&noisy, kind, 3).expect("convolve");
        rp.compare_buffers(&expected, &written);
        eprintln!("  {}: {}x{} -> {}", kind, summary.width, summary.height, output);
    }

    // --- Test 2: programmatic config, PNM output inferred from extension ---
    let output = format!("{}/pipeline_mask5.pgm", outdir);
    let config = RunConfig::new(&input, &output, FilterKind::Arithmetic, 5);
    let summary = run(&config).expect("run");
    rp.compare_values(
        1.0,
        if summary.output_format == ImageFormat::Pnm {
            1.0
        } else {
            0.0
        },
        0.0,
    );
    let written = io::read_image(&output)
        .expect("read output")
        .to_pixel_buffer()
        .expect("extract");
    let expected = filter::convolve(&noisy, FilterKind::Arithmetic, 5).expect("convolve");
    rp.compare_buffers(&expected, &written);

    // --- Test 3: bad kind token is rejected when loading ---
    let config_path = format!("{}/pipeline_bad.json", outdir);
    fs::write(
        &config_path,
        r#"{ "input": "a.png", "output": "b.png", "filter": { "kind": "median" } }"#,
    )
    .expect("write config");
    let rejected = load_config(Path::new(&config_path)).is_err();
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: missing input is a read error ---
    let config = RunConfig::new(
        format!("{}/does_not_exist.png", outdir),
        format!("{}/never_written.png", outdir),
        FilterKind::Arithmetic,
        3,
    );
    let missing = matches!(run(&config), Err(PipelineError::Read { .. }));
    rp.compare_values(1.0, if missing { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pipeline regression test failed");
}
