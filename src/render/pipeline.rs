use std::path::Path;
use std::time::Instant;

use image::RgbImage;

use crate::design::model::{Complexity, DesignRequest, LayoutArchetype, Mood, Palette};
use crate::encode::pdf::encode_pdf;
use crate::encode::png::encode_png;
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{BookmarkError, BookmarkResult};
use crate::render::background::{PhotoStatus, apply_user_photo, draw_background, fill_solid};
use crate::render::composite::{paste, stroke_box};
use crate::render::ornament::draw_ornaments;
use crate::render::report::{Degradation, RenderReport};
use crate::render::settings::RenderSettings;
use crate::render::sketch::draw_layout_sketch;
use crate::text::font::FontResolver;
use crate::text::rich::TextPass;
use crate::text::zone::resolve_text_zone;

const TRIM_GUIDE: Rgb8 = Rgb8::new(0xFF, 0x00, 0x00);
const SAFE_GUIDE: Rgb8 = Rgb8::new(0x00, 0xFF, 0x00);

/// Low-resolution preview of a design.
#[derive(Clone, Debug)]
pub struct Preview {
    /// Rendered pixels.
    pub image: RgbImage,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Resolution the preview was rendered at.
    pub dpi: u32,
    /// Degradations hit while rendering.
    pub report: RenderReport,
}

impl Preview {
    /// Encode the preview as PNG tagged with its DPI.
    pub fn encode_png(&self) -> BookmarkResult<Vec<u8>> {
        encode_png(&self.image, self.dpi)
    }
}

/// Print-ready output: one raster and one single-page document from the same pixels.
#[derive(Clone, Debug)]
pub struct FinalOutput {
    /// PNG bytes with a `pHYs` chunk.
    pub png: Vec<u8>,
    /// PDF bytes embedding the same pixels.
    pub pdf: Vec<u8>,
    /// Width in pixels, bleed included.
    pub width: u32,
    /// Height in pixels, bleed included.
    pub height: u32,
    /// Resolution of both outputs.
    pub dpi: u32,
    /// Degradations hit while rendering.
    pub report: RenderReport,
}

/// Render a preview: base fill, layout sketch, then ornaments for the tier.
#[tracing::instrument(skip(colors, settings), fields(tier = complexity.tier()))]
pub fn render_preview(
    mood: Mood,
    complexity: Complexity,
    colors: &Palette,
    layout: LayoutArchetype,
    settings: &RenderSettings,
) -> BookmarkResult<Preview> {
    settings.print.validate()?;
    let canvas = Canvas::preview(&settings.print);
    ensure_content(&canvas)?;
    let start = Instant::now();

    let mut image = RgbImage::from_pixel(canvas.width, canvas.height, colors.base().to_pixel());
    draw_layout_sketch(&mut image, layout, colors);
    draw_ornaments(&mut image, complexity, colors);

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "preview rendered"
    );
    Ok(Preview {
        image,
        width: canvas.width,
        height: canvas.height,
        dpi: canvas.dpi,
        report: RenderReport::default(),
    })
}

/// Render the print-ready bookmark and encode it as PNG and PDF.
///
/// A user photo covers the content area and replaces the background step. Missing resources
/// degrade the render and are listed in the report; encoding failures are errors.
#[tracing::instrument(
    skip(request, settings),
    fields(layout = ?request.layout, tier = request.complexity.tier(), photo = user_photo.is_some())
)]
pub fn render_final(
    request: &DesignRequest,
    user_photo: Option<&Path>,
    settings: &RenderSettings,
) -> BookmarkResult<FinalOutput> {
    request.validate()?;
    settings.print.validate()?;
    let canvas = Canvas::final_output(&settings.print);
    ensure_content(&canvas)?;
    let mut report = RenderReport::default();
    let palette = &request.colors;

    let mut image = RgbImage::from_pixel(canvas.width, canvas.height, palette.base().to_pixel());
    let mut content = RgbImage::from_pixel(
        canvas.content_width(),
        canvas.content_height(),
        palette.base().to_pixel(),
    );

    let start = Instant::now();
    let photo = match user_photo {
        Some(path) => apply_user_photo(&mut content, path, &mut report),
        None => PhotoStatus::Missing,
    };
    if photo == PhotoStatus::Missing {
        match &request.background {
            Some(spec) => {
                draw_background(&mut content, spec, &mut report);
            }
            None => fill_solid(&mut content, palette.base()),
        }
    }
    tracing::debug!(elapsed_ms = start.elapsed().as_millis() as u64, ?photo, "background stage");

    let start = Instant::now();
    let resolver = FontResolver::new(settings.fonts.paths.clone());
    let zone = resolve_text_zone(
        content.width(),
        content.height(),
        request.layout,
        request.text_zone.as_ref(),
    );
    let pass = TextPass {
        resolver: &resolver,
        palette,
        zone,
    };
    pass.render(
        &mut content,
        request.rich_text.as_ref(),
        &request.user_text,
        &mut report,
    );
    if resolver.used_fallback() {
        report.record(Degradation::FontFallback);
    }
    tracing::debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        font = ?resolver.loaded_path(),
        "text stage"
    );

    if request.show_borders {
        draw_ornaments(&mut content, request.complexity, palette);
    }

    let bleed = i64::from(canvas.bleed);
    paste(&mut image, &content, bleed, bleed);
    if settings.draw_guides {
        draw_guides(&mut image, &canvas);
    }

    let start = Instant::now();
    let png = encode_png(&image, canvas.dpi)?;
    let pdf = encode_pdf(&image, canvas.dpi)?;
    tracing::debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        png_bytes = png.len(),
        pdf_bytes = pdf.len(),
        "encode stage"
    );

    Ok(FinalOutput {
        png,
        pdf,
        width: canvas.width,
        height: canvas.height,
        dpi: canvas.dpi,
        report,
    })
}

/// Outline the trim line in red and the safe margin in green.
pub fn draw_guides(image: &mut RgbImage, canvas: &Canvas) {
    let (w, h) = (canvas.width, canvas.height);
    let b = canvas.bleed;
    let s = canvas.safe_margin;
    if w > 2 * b {
        stroke_box(image, b, b, w - b, h - b, 1, TRIM_GUIDE);
    }
    if w > 2 * (b + s) && h > 2 * (b + s) {
        stroke_box(image, b + s, b + s, w - b - s, h - b - s, 1, SAFE_GUIDE);
    }
}

fn ensure_content(canvas: &Canvas) -> BookmarkResult<()> {
    if canvas.content_width() == 0 || canvas.content_height() == 0 {
        return Err(BookmarkError::render(format!(
            "canvas {}x{} at {} dpi has no content area",
            canvas.width, canvas.height, canvas.dpi
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
