use std::io::Cursor;

use image::RgbImage;

use crate::encode::{dpi_to_ppm, ppm_to_dpi};
use crate::foundation::error::{BookmarkError, BookmarkResult};

/// Dimensions and resolution read back from an encoded raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Resolution from the `pHYs` chunk, if present and metric.
    pub dpi: Option<u32>,
}

/// Encode an RGB8 surface as PNG with a `pHYs` chunk carrying `dpi`.
pub fn encode_png(img: &RgbImage, dpi: u32) -> BookmarkResult<Vec<u8>> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(BookmarkError::encode("cannot encode an empty image"));
    }
    let mut out = Vec::new();
    {
        let mut encoder = ::png::Encoder::new(&mut out, w, h);
        encoder.set_color(::png::ColorType::Rgb);
        encoder.set_depth(::png::BitDepth::Eight);
        let ppm = dpi_to_ppm(dpi);
        encoder.set_pixel_dims(Some(::png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: ::png::Unit::Meter,
        }));
        let mut writer = encoder
            .write_header()
            .map_err(|e| BookmarkError::encode(format!("png header: {e}")))?;
        writer
            .write_image_data(img.as_raw())
            .map_err(|e| BookmarkError::encode(format!("png data: {e}")))?;
        writer
            .finish()
            .map_err(|e| BookmarkError::encode(format!("png finish: {e}")))?;
    }
    Ok(out)
}

/// Read dimensions and DPI from PNG bytes without decoding pixels.
pub fn read_png_info(bytes: &[u8]) -> BookmarkResult<RasterInfo> {
    let decoder = ::png::Decoder::new(Cursor::new(bytes));
    let reader = decoder
        .read_info()
        .map_err(|e| BookmarkError::encode(format!("png info: {e}")))?;
    let info = reader.info();
    let dpi = info.pixel_dims.and_then(|d| match d.unit {
        ::png::Unit::Meter if d.xppu == d.yppu => Some(ppm_to_dpi(d.xppu)),
        _ => None,
    });
    Ok(RasterInfo {
        width: info.width,
        height: info.height,
        dpi,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
