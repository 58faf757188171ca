// File: crates/cie-core/tests/scenarios.rs
// Purpose: End-to-end submit-and-render cycles through `mark_points`.

mod common;

use cie_core::{
    decode_background, label_text, load_background, mark_points, ChartConfig, LineError, MarkError,
    MarkerStyle, SAMPLE_INPUT,
};
use common::{background, background_png, blank_png, is_dark, markers_only, rgba};

#[test]
fn single_d65_point() {
    let out = mark_points("0.3127 0.3291 D65", &background(), &ChartConfig::default(), &markers_only())
        .expect("render");
    assert!(out.warnings.is_empty());
    assert_eq!(out.records.len(), 1);
    assert_eq!(label_text(&out.records[0]), "D65 (0.3127,0.3291)");
    assert!(out.png.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = rgba(&out.png);
    let (cx, cy) = ChartConfig::default().xy_to_px(0.3127, 0.3291);
    assert!(is_dark(img.get_pixel(cx as u32, cy as u32)));
}

#[test]
fn out_of_range_point_leaves_background_untouched() {
    let out = mark_points("0.9 0.5 X", &background(), &ChartConfig::default(), &MarkerStyle::default())
        .expect("render");
    assert!(out.records.is_empty());
    assert_eq!(out.warnings, vec![LineError::OutOfRange { x: 0.9, y: 0.5 }]);
    assert_eq!(rgba(&out.png).as_raw(), rgba(&background_png()).as_raw());
}

#[test]
fn empty_input_is_rejected_before_render() {
    for text in ["", "   ", "\n\t\n"] {
        let err = mark_points(text, &background(), &ChartConfig::default(), &MarkerStyle::default())
            .expect_err("empty input");
        assert!(matches!(err, MarkError::EmptyInput));
        assert_eq!(err.to_string(), "please enter coordinates");
    }
}

#[test]
fn sample_input_marks_four_points() {
    let out = mark_points(SAMPLE_INPUT, &background(), &ChartConfig::default(), &markers_only()).expect("render");
    assert_eq!(out.records.len(), 4);
    assert!(out.warnings.is_empty());
}

#[test]
fn missing_background_is_fatal() {
    let err = load_background("no/such/background.jpg").expect_err("missing file");
    assert!(matches!(err, MarkError::AssetLoad { .. }));
    assert!(err.to_string().contains("no/such/background.jpg"));
}

#[test]
fn undecodable_background_is_fatal() {
    assert!(matches!(decode_background(b"definitely not an image"), Err(MarkError::AssetLoad { .. })));
    assert!(matches!(decode_background(&[]), Err(MarkError::AssetLoad { .. })));
}

#[test]
fn background_loads_from_disk() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).expect("create out dir");
    let path = dir.join("scenario_background.png");
    std::fs::write(&path, background_png()).expect("write fixture");
    let img = load_background(&path).expect("load");
    assert_eq!((img.width(), img.height()), (common::BG_WIDTH, common::BG_HEIGHT));
}

#[test]
fn backdrop_smaller_than_anchors_is_fatal() {
    let small = decode_background(&blank_png(100, 100)).expect("decode");
    let err = mark_points("0.3127 0.3291 D65", &small, &ChartConfig::default(), &markers_only())
        .expect_err("anchors exceed backdrop");
    assert!(matches!(err, MarkError::AnchorsOutsideImage { width: 100, height: 100, .. }), "got {err:?}");
}

#[test]
fn backdrop_exactly_spanning_anchors_renders() {
    let tight = decode_background(&blank_png(678, 735)).expect("decode");
    let out = mark_points("0.8 0.9 corner", &tight, &ChartConfig::default(), &markers_only()).expect("render");
    assert_eq!(out.records.len(), 1);
}
