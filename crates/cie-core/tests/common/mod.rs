// File: crates/cie-core/tests/common/mod.rs
// Purpose: Shared fixtures: a synthetic chart backdrop and pixel decoding helpers.

#![allow(dead_code)]

use skia_safe as skia;

pub const BG_WIDTH: i32 = 720;
pub const BG_HEIGHT: i32 = 760;

/// Opaque white backdrop with light-gray axes at the default anchors.
pub fn background_png() -> Vec<u8> {
    let mut surface = skia::surfaces::raster_n32_premul((BG_WIDTH, BG_HEIGHT)).expect("surface");
    let canvas = surface.canvas();
    canvas.clear(skia::Color::WHITE);
    let mut axis = skia::Paint::default();
    axis.set_color(skia::Color::from_argb(255, 200, 200, 200));
    axis.set_stroke_width(1.0);
    canvas.draw_line((40.0, 735.0), (678.0, 735.0), &axis);
    canvas.draw_line((40.0, 16.0), (40.0, 735.0), &axis);
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image.encode_to_data(skia::EncodedImageFormat::PNG).expect("encode fixture");
    data.as_bytes().to_vec()
}

/// Plain white backdrop of any size.
pub fn blank_png(width: i32, height: i32) -> Vec<u8> {
    let mut surface = skia::surfaces::raster_n32_premul((width, height)).expect("surface");
    surface.canvas().clear(skia::Color::WHITE);
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image.encode_to_data(skia::EncodedImageFormat::PNG).expect("encode fixture");
    data.as_bytes().to_vec()
}

pub fn background() -> skia::Image {
    cie_core::decode_background(&background_png()).expect("decode fixture")
}

pub fn rgba(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory(png).expect("decode png").to_rgba8()
}

pub fn is_dark(px: &image::Rgba<u8>) -> bool {
    px.0[0] < 64 && px.0[1] < 64 && px.0[2] < 64
}

/// Labels off so pixels do not depend on installed fonts.
pub fn markers_only() -> cie_core::MarkerStyle {
    cie_core::MarkerStyle { draw_labels: false, ..Default::default() }
}
