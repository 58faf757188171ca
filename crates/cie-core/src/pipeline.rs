// File: crates/cie-core/src/pipeline.rs
// Summary: One submit-and-render cycle: empty check, parse, annotate, PNG encode.

use skia_safe as skia;

use crate::annotate::annotate;
use crate::asset::encode_png;
use crate::config::ChartConfig;
use crate::error::{LineError, MarkError};
use crate::parse::{parse, CoordinateRecord};
use crate::theme::MarkerStyle;

/// Everything a presentation layer needs after a render.
#[derive(Clone, Debug)]
pub struct MarkOutput {
    pub png: Vec<u8>,
    pub records: Vec<CoordinateRecord>,
    /// One entry per skipped line, in input order.
    pub warnings: Vec<LineError>,
}

/// Parse `text` and mark every valid point on a copy of `background`.
///
/// Whitespace-only input is rejected before anything is drawn. Skipped lines
/// land in `warnings`; they never fail the render.
pub fn mark_points(
    text: &str,
    background: &skia::Image,
    config: &ChartConfig,
    style: &MarkerStyle,
) -> Result<MarkOutput, MarkError> {
    if text.trim().is_empty() {
        return Err(MarkError::EmptyInput);
    }

    let outcome = parse(text, config);
    let image = annotate(background, &outcome.records, config, style)?;
    let png = encode_png(&image)?;

    log::info!(
        "marked {} point(s), skipped {} line(s), {} PNG bytes",
        outcome.records.len(),
        outcome.warnings.len(),
        png.len()
    );
    Ok(MarkOutput { png, records: outcome.records, warnings: outcome.warnings })
}
