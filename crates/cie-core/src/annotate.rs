// File: crates/cie-core/src/annotate.rs
// Summary: Draws cross-hair markers and coordinate labels onto a copy of the background chart.

use skia_safe as skia;

use crate::config::ChartConfig;
use crate::error::MarkError;
use crate::parse::CoordinateRecord;
use crate::text::{load_font, LabelFont};
use crate::theme::MarkerStyle;

/// Pixel placement of one record, as drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub px: f32,
    pub py: f32,
    pub text: String,
}

impl Marker {
    pub fn place(record: &CoordinateRecord, config: &ChartConfig) -> Self {
        let (px, py) = config.xy_to_px(record.x, record.y);
        Self { px: px as f32, py: py as f32, text: label_text(record) }
    }
}

/// `"D65 (0.3127,0.3291)"`. An empty label still leaves the separating space.
pub fn label_text(record: &CoordinateRecord) -> String {
    format!("{} ({:.4},{:.4})", record.label, record.x, record.y)
}

/// Render `records` over `background`. The background is only read; the result
/// is a new image the caller owns.
pub fn annotate(
    background: &skia::Image,
    records: &[CoordinateRecord],
    config: &ChartConfig,
    style: &MarkerStyle,
) -> Result<skia::Image, MarkError> {
    let (width, height) = (background.width(), background.height());
    if !config.fits_image(width, height) {
        return Err(MarkError::AnchorsOutsideImage {
            x_px: config.x_max_px,
            y_px: config.y0_px.max(config.y_max_px),
            width,
            height,
        });
    }
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(MarkError::Surface { width, height })?;
    let canvas = surface.canvas();
    canvas.draw_image(background, (0.0, 0.0), None);

    let font = style.draw_labels.then(|| load_font(style.font_path.as_deref(), style.font_size));
    if let Some(font) = &font {
        log::debug!("label font: {:?}", font.origin());
    }
    let stroke = style.stroke_paint();
    let ink = style.text_paint();

    for record in records {
        let marker = Marker::place(record, config);
        draw_crosshair(canvas, &marker, style, &stroke);
        if let Some(font) = &font {
            draw_label(canvas, &marker, style, font, &ink);
        }
        log::debug!("marked {:?} at ({:.1}, {:.1})", marker.text, marker.px, marker.py);
    }

    Ok(surface.image_snapshot())
}

// ---- helpers ----------------------------------------------------------------

fn draw_crosshair(canvas: &skia::Canvas, m: &Marker, style: &MarkerStyle, paint: &skia::Paint) {
    let r = style.radius;
    canvas.draw_line((m.px - r, m.py), (m.px + r, m.py), paint);
    canvas.draw_line((m.px, m.py - r), (m.px, m.py + r), paint);
}

fn draw_label(canvas: &skia::Canvas, m: &Marker, style: &MarkerStyle, font: &LabelFont, paint: &skia::Paint) {
    let (dx, dy) = style.label_offset;
    font.draw_top_left(canvas, &m.text, m.px + dx, m.py + dy, paint);
}
