// File: crates/cie-core/src/config.rs
// Summary: Fixed affine mapping between chromaticity (x, y) and background pixel coordinates.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Pixel anchors of the plotted axes on the background image plus the domain maxima.
///
/// Contract: built once, never mutated while rendering. Call [`ChartConfig::validate`]
/// on anything not produced by `Default`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Pixel column of x = 0.
    pub x0_px: f64,
    /// Pixel row of y = 0.
    pub y0_px: f64,
    /// Pixel column of x = x_max.
    pub x_max_px: f64,
    /// Pixel row of the x axis at its right end.
    pub y_max_px: f64,
    /// Pixel row of y = y_max.
    pub y_top_px: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x0_px: 40.0,
            y0_px: 735.0,
            x_max_px: 678.0,
            y_max_px: 735.0,
            y_top_px: 16.0,
            x_max: 0.8,
            y_max: 0.9,
        }
    }
}

impl ChartConfig {
    /// Horizontal scale, pixels per unit x.
    #[inline]
    pub fn sx(&self) -> f64 {
        (self.x_max_px - self.x0_px) / self.x_max
    }

    /// Vertical scale, pixels per unit y.
    #[inline]
    pub fn sy(&self) -> f64 {
        (self.y0_px - self.y_top_px) / self.y_max
    }

    /// Map domain coordinates to pixels. Pixel rows grow downward, so y is inverted.
    #[inline]
    pub fn xy_to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x0_px + self.sx() * x, self.y0_px - self.sy() * y)
    }

    #[inline]
    pub fn px_to_xy(&self, px: f64, py: f64) -> (f64, f64) {
        ((px - self.x0_px) / self.sx(), (self.y0_px - py) / self.sy())
    }

    /// Inclusive bounds check; NaN is never contained.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.x_max).contains(&x) && (0.0..=self.y_max).contains(&y)
    }

    /// True when every anchor lies on a `width` x `height` backdrop.
    pub fn fits_image(&self, width: i32, height: i32) -> bool {
        let (w, h) = (f64::from(width), f64::from(height));
        self.x0_px >= 0.0
            && self.x_max_px <= w
            && self.y_top_px >= 0.0
            && self.y0_px <= h
            && self.y_max_px <= h
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("x0_px", self.x0_px),
            ("y0_px", self.y0_px),
            ("x_max_px", self.x_max_px),
            ("y_max_px", self.y_max_px),
            ("y_top_px", self.y_top_px),
            ("x_max", self.x_max),
            ("y_max", self.y_max),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }
        if self.x_max <= 0.0 {
            return Err(ConfigError::NonPositiveDomain { field: "x_max", value: self.x_max });
        }
        if self.y_max <= 0.0 {
            return Err(ConfigError::NonPositiveDomain { field: "y_max", value: self.y_max });
        }
        if self.x_max_px <= self.x0_px {
            return Err(ConfigError::InvertedSpan { what: "x0_px..x_max_px", from: self.x0_px, to: self.x_max_px });
        }
        if self.y0_px <= self.y_top_px {
            return Err(ConfigError::InvertedSpan { what: "y_top_px..y0_px", from: self.y_top_px, to: self.y0_px });
        }
        Ok(())
    }

    /// Parse a JSON override; omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&json)
    }
}
