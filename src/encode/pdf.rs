//! Single-page PDF holding one raster image.
//!
//! The page is exactly the image at its DPI (MediaBox = pixels × 72 / dpi points). Pixels are
//! stored as an 8-bit DeviceRGB image XObject with `FlateDecode`, so decoding the document gives
//! back the same bytes as decoding the PNG.

use std::io::{Read, Write};

use anyhow::Context;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use image::RgbImage;

use crate::foundation::error::{BookmarkError, BookmarkResult};

const PDF_VERSION: &str = "1.4";
const PRODUCER: &str = "bookmarker";

/// Encode `img` as a one-page PDF at `dpi`.
pub fn encode_pdf(img: &RgbImage, dpi: u32) -> BookmarkResult<Vec<u8>> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 || dpi == 0 {
        return Err(BookmarkError::encode(
            "pdf needs a non-empty image and a positive dpi",
        ));
    }
    let page_w = points(w, dpi);
    let page_h = points(h, dpi);
    let pixels = deflate(img.as_raw())?;
    let content = format!("q {page_w} 0 0 {page_h} 0 0 cm /Im0 Do Q");

    let mut out = Vec::new();
    let mut offsets = Vec::new();
    write_pdf(&mut out, &mut offsets, w, h, &page_w, &page_h, &pixels, &content)
        .context("write pdf body")?;

    let xref_start = out.len();
    let size = offsets.len() + 1;
    let mut tail = String::new();
    tail.push_str(&format!("xref\n0 {size}\n0000000000 65535 f \n"));
    for off in &offsets {
        tail.push_str(&format!("{off:010} 00000 n \n"));
    }
    tail.push_str(&format!(
        "trailer\n<< /Size {size} /Root 1 0 R /Info 6 0 R >>\nstartxref\n{xref_start}\n%%EOF\n"
    ));
    out.extend_from_slice(tail.as_bytes());
    Ok(out)
}

#[allow(clippy::too_many_arguments)]
fn write_pdf(
    out: &mut Vec<u8>,
    offsets: &mut Vec<usize>,
    w: u32,
    h: u32,
    page_w: &str,
    page_h: &str,
    pixels: &[u8],
    content: &str,
) -> std::io::Result<()> {
    writeln!(out, "%PDF-{PDF_VERSION}")?;
    out.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

    offsets.push(out.len());
    writeln!(out, "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj")?;

    offsets.push(out.len());
    writeln!(out, "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj")?;

    offsets.push(out.len());
    writeln!(
        out,
        "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w} {page_h}] \
         /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>\nendobj"
    )?;

    offsets.push(out.len());
    writeln!(
        out,
        "4 0 obj\n<< /Type /XObject /Subtype /Image /Width {w} /Height {h} \
         /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /FlateDecode /Length {} >>\nstream",
        pixels.len()
    )?;
    out.extend_from_slice(pixels);
    writeln!(out, "\nendstream\nendobj")?;

    offsets.push(out.len());
    writeln!(
        out,
        "5 0 obj\n<< /Length {} >>\nstream\n{content}\nendstream\nendobj",
        content.len()
    )?;

    offsets.push(out.len());
    writeln!(out, "6 0 obj\n<< /Producer ({PRODUCER}) >>\nendobj")?;
    Ok(())
}

fn deflate(data: &[u8]) -> BookmarkResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).context("deflate image data")?;
    Ok(encoder.finish().context("finish deflate stream")?)
}

/// Page length in points for `px` pixels at `dpi`, without trailing zeros.
fn points(px: u32, dpi: u32) -> String {
    let pt = f64::from(px) * 72.0 / f64::from(dpi);
    let s = format!("{pt:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// What [`inspect_pdf`] found in a document written by [`encode_pdf`].
#[derive(Clone, Debug, PartialEq)]
pub struct PdfImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Page size in points.
    pub media_box: [f64; 2],
    /// Decompressed RGB8 pixels.
    pub pixels: Vec<u8>,
}

impl PdfImage {
    /// Effective resolution of the image on the page.
    pub fn dpi(&self) -> u32 {
        if self.media_box[0] <= 0.0 {
            return 0;
        }
        (f64::from(self.width) * 72.0 / self.media_box[0]).round() as u32
    }
}

/// Read back the image of a PDF produced by [`encode_pdf`].
///
/// This is not a general PDF parser; it understands the single-image layout written above.
pub fn inspect_pdf(bytes: &[u8]) -> BookmarkResult<PdfImage> {
    let bad = |what: &str| BookmarkError::encode(format!("unrecognised pdf: {what}"));
    if !bytes.starts_with(b"%PDF-") {
        return Err(bad("missing header"));
    }
    let media = after(bytes, b"/MediaBox [").ok_or_else(|| bad("no MediaBox"))?;
    let media_end = find(&bytes[media..], b"]").ok_or_else(|| bad("unterminated MediaBox"))?;
    let nums: Vec<f64> = std::str::from_utf8(&bytes[media..media + media_end])
        .map_err(|_| bad("MediaBox is not text"))?
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| bad("MediaBox is not numeric"))?;
    let [_, _, mw, mh] = nums[..] else {
        return Err(bad("MediaBox needs four numbers"));
    };

    let img = after(bytes, b"/Subtype /Image").ok_or_else(|| bad("no image XObject"))?;
    let dict = &bytes[img..];
    let width = read_int(dict, b"/Width ").ok_or_else(|| bad("no /Width"))?;
    let height = read_int(dict, b"/Height ").ok_or_else(|| bad("no /Height"))?;
    let len = read_int(dict, b"/Length ").ok_or_else(|| bad("no /Length"))? as usize;
    let start = after(dict, b"stream\n").ok_or_else(|| bad("no image stream"))?;
    let stream = dict.get(start..start + len).ok_or_else(|| bad("truncated stream"))?;

    let mut pixels = Vec::new();
    ZlibDecoder::new(stream)
        .read_to_end(&mut pixels)
        .context("inflate image stream")?;

    Ok(PdfImage {
        width,
        height,
        media_box: [mw, mh],
        pixels,
    })
}

fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}

fn after(hay: &[u8], needle: &[u8]) -> Option<usize> {
    find(hay, needle).map(|i| i + needle.len())
}

fn read_int(hay: &[u8], key: &[u8]) -> Option<u32> {
    let start = after(hay, key)?;
    let digits = hay[start..].iter().take_while(|b| b.is_ascii_digit()).count();
    std::str::from_utf8(&hay[start..start + digits]).ok()?.parse().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/encode/pdf.rs"]
mod tests;
