// File: crates/cie-core/src/lib.rs
// Summary: Core library entry point; exports the coordinate parser, chart annotator and pipeline.

pub mod annotate;
pub mod asset;
pub mod config;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod text;
pub mod theme;
pub mod types;

pub use annotate::{annotate, label_text, Marker};
pub use asset::{decode_background, encode_png, load_background};
pub use config::ChartConfig;
pub use error::{ConfigError, FontError, LineError, MarkError};
pub use parse::{parse, parse_line, CoordinateRecord, ParseOutcome};
pub use pipeline::{mark_points, MarkOutput};
pub use text::{load_font, FontOrigin, LabelFont};
pub use theme::MarkerStyle;
pub use types::{DOWNLOAD_FILE_NAME, PNG_MIME, SAMPLE_INPUT};
