// File: crates/cie-core/src/theme.rs
// Summary: Marker and label styling for chart annotation.

use std::path::PathBuf;

use skia_safe as skia;

use crate::types::{LABEL_FONT_SIZE, LABEL_OFFSET, MARKER_RADIUS, MARKER_STROKE};

#[derive(Clone, Debug)]
pub struct MarkerStyle {
    pub ink: skia::Color,
    pub radius: f32,
    pub stroke_width: f32,
    pub label_offset: (f32, f32),
    pub font_size: f32,
    /// Explicit font file; `None` tries the platform default file, then system families.
    pub font_path: Option<PathBuf>,
    /// Skip text entirely (keeps output independent of installed fonts).
    pub draw_labels: bool,
    pub anti_alias: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            ink: skia::Color::BLACK,
            radius: MARKER_RADIUS,
            stroke_width: MARKER_STROKE,
            label_offset: LABEL_OFFSET,
            font_size: LABEL_FONT_SIZE,
            font_path: None,
            draw_labels: true,
            anti_alias: true,
        }
    }
}

impl MarkerStyle {
    pub(crate) fn stroke_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(self.ink);
        paint.set_anti_alias(self.anti_alias);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.stroke_width);
        paint
    }

    pub(crate) fn text_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(self.ink);
        paint.set_anti_alias(self.anti_alias);
        paint
    }
}
