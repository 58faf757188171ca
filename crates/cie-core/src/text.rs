// File: crates/cie-core/src/text.rs
// Summary: Best-effort label font loading with an explicit fallback chain.

use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::error::FontError;
use crate::types::{DEFAULT_FONT_FILE, FONT_FAMILIES};

/// Where the label typeface came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    File(PathBuf),
    Family(String),
    SystemDefault,
    /// Skia's empty typeface; text still lays out but may draw no glyphs.
    Builtin,
}

pub struct LabelFont {
    font: skia::Font,
    origin: FontOrigin,
}

impl LabelFont {
    pub fn origin(&self) -> &FontOrigin {
        &self.origin
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self.origin, FontOrigin::File(_))
    }

    pub fn font(&self) -> &skia::Font {
        &self.font
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, paint: &skia::Paint) {
        let (_, metrics) = self.font.metrics();
        // ascent is negative (above the baseline)
        canvas.draw_str(text, (x, y - metrics.ascent), &self.font, paint);
    }
}

fn typeface_from_file(mgr: &skia::FontMgr, path: &Path) -> Result<skia::Typeface, FontError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FontError::NotFound(path.to_path_buf()),
        _ => FontError::Unreadable { path: path.to_path_buf(), reason: e.to_string() },
    })?;
    mgr.new_from_data(&bytes, None::<usize>).ok_or_else(|| FontError::Unreadable {
        path: path.to_path_buf(),
        reason: "not a font file skia can decode".into(),
    })
}

/// Load the label font. Never fails: a missing or unreadable file falls back to a
/// named system family, then the system default, then Skia's builtin typeface.
pub fn load_font(path: Option<&Path>, size: f32) -> LabelFont {
    let mgr = skia::FontMgr::default();
    let size = size.max(1.0);
    let file = path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_FILE));

    match typeface_from_file(&mgr, &file) {
        Ok(tf) => {
            return LabelFont { font: skia::Font::from_typeface(tf, size), origin: FontOrigin::File(file) };
        }
        Err(err) => log::debug!("{err}; falling back to system fonts"),
    }

    for family in FONT_FAMILIES {
        if let Some(tf) = mgr.match_family_style(*family, skia::FontStyle::normal()) {
            return LabelFont {
                font: skia::Font::from_typeface(tf, size),
                origin: FontOrigin::Family((*family).to_string()),
            };
        }
    }

    if let Some(tf) = mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::normal()) {
        return LabelFont { font: skia::Font::from_typeface(tf, size), origin: FontOrigin::SystemDefault };
    }

    log::debug!("no system typeface available; using builtin font");
    let mut font = skia::Font::default();
    font.set_size(size);
    LabelFont { font, origin: FontOrigin::Builtin }
}
