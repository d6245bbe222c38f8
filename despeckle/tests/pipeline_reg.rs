//! End-to-end pipeline regression test
//!
//! Tests:
//!   (1) Binarizing a white square on black at 128 leaves it unchanged, and
//!       a cross erosion removes its outer rings
//!   (2) The full default pipeline turns the square into a rounded block
//!   (3) Speckles on a bright block are removed except in the border frame
//!   (4) Every threshold source yields a two-level image of the same size
//!   (5) File to file processing through PGM

use despeckle::morph::{StructuringMask, erode};
use despeckle::threshold::{ThresholdSource, TileOptions, binarize};
use despeckle::{BLACK, ImageBuffer, Pipeline, PipelineConfig, Region, WHITE, io};
use despeckle_test::{RegParams, fixtures};

#[test]
fn pipeline_reg_square_stages() {
    let mut rp = RegParams::new("pipeline_square_stages");

    let img = fixtures::square_on_black(20, 20, Region::new(5, 5, 10, 10));
    let binary = binarize(&img, 128);
    rp.compare_images(&img, &binary);

    let eroded = erode(&binary, &StructuringMask::cross(3).expect("cross")).expect("erode");
    // the boundary ring and the ring inside it are cleared
    for i in 5..15 {
        rp.check(eroded.pixel(i, 5) == BLACK, "top ring cleared");
        rp.check(eroded.pixel(5, i) == BLACK, "left ring cleared");
        rp.check(eroded.pixel(i, 14) == BLACK, "bottom ring cleared");
        rp.check(eroded.pixel(14, i) == BLACK, "right ring cleared");
    }
    rp.compare_values(36.0, eroded.count_value(WHITE) as f64, 0.0);

    assert!(rp.cleanup(), "pipeline_square_stages regression test failed");
}

#[test]
fn pipeline_reg_square_full() {
    let mut rp = RegParams::new("pipeline_square_full");

    let img = fixtures::square_on_black(20, 20, Region::new(5, 5, 10, 10));
    let stages = Pipeline::default().run_stages(&img).expect("pipeline");
    for (label, stage) in [
        ("filtered", &stages.filtered),
        ("binary", &stages.binary),
        ("eroded", &stages.eroded),
        ("smoothed", &stages.smoothed),
        ("output", &stages.output),
    ] {
        rp.write_image(stage, label).expect("write stage");
    }

    // white span per row of the final image
    let spans = [
        (5, 7, 13),
        (6, 6, 14),
        (7, 5, 15),
        (8, 5, 15),
        (9, 5, 15),
        (10, 5, 15),
        (11, 5, 15),
        (12, 5, 15),
        (13, 6, 14),
        (14, 7, 13),
    ];
    let expected = ImageBuffer::from_fn(20, 20, |x, y| {
        let inside = spans
            .iter()
            .any(|&(row, start, end)| row == y && x >= start && x < end);
        if inside { WHITE } else { BLACK }
    })
    .expect("expected");
    rp.compare_images(&expected, &stages.output);
    rp.compare_values(88.0, stages.output.count_value(WHITE) as f64, 0.0);

    assert!(rp.cleanup(), "pipeline_square_full regression test failed");
}

#[test]
fn pipeline_reg_speckles() {
    let mut rp = RegParams::new("pipeline_speckles");

    let block = Region::new(8, 6, 20, 14);
    let noisy = fixtures::speckled_block(36, 28, block, 40, 220);
    let clean = ImageBuffer::from_fn(36, 28, |x, y| {
        let inside = x >= block.x && x < block.right() && y >= block.y && y < block.bottom();
        if inside { 220 } else { 40 }
    })
    .expect("clean");
    rp.write_image(&noisy, "noisy").expect("write noisy");

    let pipeline = Pipeline::default();
    let from_noisy = pipeline.run(&noisy).expect("noisy run");
    let from_clean = pipeline.run(&clean).expect("clean run");
    rp.write_image(&from_noisy, "despeckled").expect("write output");

    // The median stages never touch the outermost frame, so a speckle
    // there survives.
    let mut interior_equal = true;
    for y in 1..27 {
        for x in 1..35 {
            if from_noisy.pixel(x, y) != from_clean.pixel(x, y) {
                interior_equal = false;
            }
        }
    }
    rp.check(interior_equal, "interior matches the speckle-free result");
    rp.compare_values(WHITE as f64, from_noisy.pixel(28, 0) as f64, 0.0);

    assert!(rp.cleanup(), "pipeline_speckles regression test failed");
}

#[test]
fn pipeline_reg_threshold_sources() {
    let mut rp = RegParams::new("pipeline_threshold_sources");

    let img = fixtures::speckled_block(40, 30, Region::new(5, 5, 25, 18), 60, 200);
    let mut configs: Vec<PipelineConfig> = (1..=5)
        .map(|id| PipelineConfig::for_preset(id).expect("preset"))
        .collect();
    configs.push(PipelineConfig::default().with_threshold(ThresholdSource::GlobalOtsu));
    configs.push(
        PipelineConfig::default().with_threshold(ThresholdSource::Tiled(TileOptions::default())),
    );

    for cfg in configs {
        let out = Pipeline::new(cfg.clone()).run(&img).expect("run");
        rp.compare_values(40.0, out.width() as f64, 0.0);
        rp.compare_values(30.0, out.height() as f64, 0.0);
        rp.check(out.is_binary(), &format!("binary output with {:?}", cfg.threshold));
    }

    assert!(rp.cleanup(), "pipeline_threshold_sources regression test failed");
}

#[test]
fn pipeline_reg_files() {
    let mut rp = RegParams::new("pipeline_files");

    let dir = std::env::temp_dir().join(format!("despeckle_pipeline_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let input = dir.join("1.pgm");
    let output = dir.join("1_new.pgm");

    let img = fixtures::square_on_black(20, 20, Region::new(5, 5, 10, 10));
    io::write_image(&img, &input, io::ImageFormat::Pnm).expect("write input");

    let pipeline = Pipeline::new(PipelineConfig::for_preset(1).expect("preset"));
    let returned = pipeline.process_file(&input, &output).expect("process");
    let reread = io::read_image(&output).expect("read output");
    rp.compare_images(&returned, &reread);
    rp.compare_images(&pipeline.run(&img).expect("run"), &reread);

    std::fs::remove_dir_all(&dir).ok();
    assert!(rp.cleanup(), "pipeline_files regression test failed");
}
