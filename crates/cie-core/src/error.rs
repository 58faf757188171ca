// File: crates/cie-core/src/error.rs
// Summary: Error types for per-line parsing, fatal render failures, configuration and fonts.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single input line was skipped. Never aborts the batch.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LineError {
    /// Fewer than two tokens, or the first two are not numbers.
    #[error("could not parse: {line}")]
    Malformed { line: String },
    /// Parsed fine but lies outside the chart's domain bounds.
    #[error("out of range: ({x},{y}), skipped")]
    OutOfRange { x: f64, y: f64 },
}

/// Failures that stop a render before any image is produced.
#[derive(Debug, Error)]
pub enum MarkError {
    #[error("please enter coordinates")]
    EmptyInput,
    /// `origin` is the file path, or `<memory>` for in-memory bytes.
    #[error("failed to load background {origin}: {reason}")]
    AssetLoad { origin: String, reason: String },
    /// The chart anchors reach past the backdrop's edges.
    #[error("chart anchors ({x_px}, {y_px}) lie outside the {width}x{height} background")]
    AnchorsOutsideImage { x_px: f64, y_px: f64, width: i32, height: i32 },
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
}

/// Rejected chart configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config value `{field}` must be finite")]
    NotFinite { field: &'static str },
    #[error("domain maximum `{field}` must be positive, got {value}")]
    NonPositiveDomain { field: &'static str, value: f64 },
    #[error("pixel span {what} is empty or inverted ({from} -> {to})")]
    InvertedSpan { what: &'static str, from: f64, to: f64 },
    #[error("reading config {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },
    #[error("parsing config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Font lookup failure. Always recovered by falling back to a default typeface.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font file {0} not found")]
    NotFound(PathBuf),
    #[error("font file {path} unreadable: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}
