// File: crates/cie-core/src/types.rs
// Summary: Shared constants (download metadata, sample input, default styling values).

/// File name offered for the annotated chart.
pub const DOWNLOAD_FILE_NAME: &str = "cie_marked_points.png";
/// MIME type of the annotated chart.
pub const PNG_MIME: &str = "image/png";

/// Example input shown to users: D65 white point and sRGB-like primaries.
pub const SAMPLE_INPUT: &str = "0.3127 0.3291 D65\n0.64 0.33 R\n0.30 0.60 G\n0.15 0.06 B";

/// Half-length of each cross-hair arm, in pixels.
pub const MARKER_RADIUS: f32 = 6.0;
/// Cross-hair stroke width, in pixels.
pub const MARKER_STROKE: f32 = 2.0;
/// Label offset from the marker center (x right, y up is negative).
pub const LABEL_OFFSET: (f32, f32) = (8.0, -12.0);
/// Label font size, in pixels.
pub const LABEL_FONT_SIZE: f32 = 18.0;
/// Font file tried first when no explicit font is given.
pub const DEFAULT_FONT_FILE: &str = "arial.ttf";
/// Family names tried, in order, through the system font manager.
pub const FONT_FAMILIES: &[&str] = &["Arial", "Helvetica", "DejaVu Sans", "Liberation Sans", "sans-serif"];
