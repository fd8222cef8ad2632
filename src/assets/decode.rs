use std::path::Path;

use anyhow::Context;

use crate::foundation::error::BookmarkResult;

/// Decode encoded image bytes (PNG, JPEG, ...) into straight-alpha RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> BookmarkResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode an image file from disk.
pub fn load_rgba(path: &Path) -> BookmarkResult<image::RgbaImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image bytes from '{}'", path.display()))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
