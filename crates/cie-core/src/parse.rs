// File: crates/cie-core/src/parse.rs
// Summary: Line-oriented parser turning `x y [label]` text into validated coordinate records.

use crate::config::ChartConfig;
use crate::error::LineError;

/// One validated chromaticity point.
/// Contract: `config.contains(x, y)` held for the config it was parsed against.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateRecord {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Records and warnings, each in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutcome {
    pub records: Vec<CoordinateRecord>,
    pub warnings: Vec<LineError>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Parse a single line. Tokens past the third are ignored.
pub fn parse_line(line: &str, config: &ChartConfig) -> Result<CoordinateRecord, LineError> {
    let malformed = || LineError::Malformed { line: line.to_string() };

    let mut tokens = line.split_whitespace();
    let x = tokens.next().and_then(|t| t.parse::<f64>().ok()).ok_or_else(malformed)?;
    let y = tokens.next().and_then(|t| t.parse::<f64>().ok()).ok_or_else(malformed)?;
    let label = tokens.next().unwrap_or_default().to_string();

    if !config.contains(x, y) {
        return Err(LineError::OutOfRange { x, y });
    }
    Ok(CoordinateRecord { x, y, label })
}

/// Parse a whole submission. The text is trimmed first, so leading and trailing
/// blank lines vanish; blank lines in between are reported as malformed.
pub fn parse(raw: &str, config: &ChartConfig) -> ParseOutcome {
    let mut out = ParseOutcome::default();
    let raw = raw.trim();
    if raw.is_empty() {
        return out;
    }
    for line in raw.lines() {
        match parse_line(line, config) {
            Ok(rec) => out.records.push(rec),
            Err(err) => {
                log::debug!("skipping line {line:?}: {err}");
                out.warnings.push(err);
            }
        }
    }
    out
}
