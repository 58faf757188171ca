// File: crates/cie-core/src/asset.rs
// Summary: Background image loading and PNG serialization.

use std::path::Path;

use skia_safe as skia;

use crate::error::MarkError;

/// Load the chart backdrop from disk. Any decodable raster format is accepted.
pub fn load_background(path: impl AsRef<Path>) -> Result<skia::Image, MarkError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let bytes = std::fs::read(path)
        .map_err(|e| MarkError::AssetLoad { origin: origin.clone(), reason: e.to_string() })?;
    decode(&bytes, origin)
}

/// Decode a backdrop that is already in memory.
pub fn decode_background(bytes: &[u8]) -> Result<skia::Image, MarkError> {
    decode(bytes, "<memory>".to_string())
}

fn decode(bytes: &[u8], origin: String) -> Result<skia::Image, MarkError> {
    if bytes.is_empty() {
        return Err(MarkError::AssetLoad { origin, reason: "file is empty".into() });
    }
    let image = skia::Image::from_encoded(skia::Data::new_copy(bytes))
        .ok_or_else(|| MarkError::AssetLoad { origin: origin.clone(), reason: "unrecognized image data".into() })?;
    if image.width() <= 0 || image.height() <= 0 {
        return Err(MarkError::AssetLoad { origin, reason: "image has no pixels".into() });
    }
    log::debug!("loaded background {origin} ({}x{})", image.width(), image.height());
    Ok(image)
}

/// Serialize an image to PNG bytes.
pub fn encode_png(image: &skia::Image) -> Result<Vec<u8>, MarkError> {
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(MarkError::Encode)?;
    Ok(data.as_bytes().to_vec())
}
