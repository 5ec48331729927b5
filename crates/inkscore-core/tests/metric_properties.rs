// this_file: crates/inkscore-core/tests/metric_properties.rs

use inkscore_core::{
    raster::{PixelFormat, INK},
    similarity,
    types::{CanvasSpec, Score},
    Raster,
};

/// Canvas-sized raster with a solid ink block of `rows` full rows at the top
fn block_reference(canvas: CanvasSpec, rows: u32) -> Raster {
    let mut raster = Raster::for_canvas(canvas);
    let inked = (rows * canvas.width) as usize;
    raster.data[..inked].fill(INK);
    raster
}

#[test]
fn test_blank_drawing_score_decreases_with_reference_coverage() {
    let canvas = CanvasSpec::default();
    let blank = Raster::for_canvas(canvas);

    let mut last = Score::MAX;
    for rows in [8, 40, 120, 260] {
        let reference = block_reference(canvas, rows);
        let value = similarity(&reference, &blank).unwrap();
        let coverage = reference.ink_coverage().unwrap();

        assert!((value - (1.0 - coverage)).abs() < 1e-12);

        let score = Score::from_similarity(value);
        assert!(score < last, "{} rows should score below {}", rows, last);
        last = score;
    }
}

#[test]
fn test_identical_canvas_rasters_score_full_marks() {
    let canvas = CanvasSpec::default();
    let reference = block_reference(canvas, 50);
    let value = similarity(&reference, &reference.clone()).unwrap();
    assert_eq!(Score::from_similarity(value), Score::MAX);
}

#[test]
fn test_rgb_canvas_matches_its_gray_collapse() {
    let canvas = CanvasSpec::new(8, 8);
    let gray = block_reference(canvas, 3);
    let rgb_data = gray.data.iter().flat_map(|&v| [v, v, v]).collect();
    let rgb = Raster::from_raw(8, 8, PixelFormat::Rgb8, rgb_data).unwrap();
    assert_eq!(similarity(&rgb, &gray).unwrap(), 1.0);
}
