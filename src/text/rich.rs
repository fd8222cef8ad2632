use image::RgbImage;

use crate::design::model::{
    FontSizeTier, Palette, RichTextContent, TextAlign, TextDirection, TextStyle,
};
use crate::foundation::core::Rgb8;
use crate::render::report::{Degradation, RenderReport};
use crate::text::font::{Face, FontResolver, GlyphStyle};
use crate::text::layout::{BLOCK_GAP, draw_glyphs, layout_horizontal, layout_vertical};
use crate::text::zone::TextZone;

/// Base pixel size for rich-text tiers on a surface `width` pixels wide.
pub fn rich_base_size(width: u32) -> u32 {
    (width / 20).max(14)
}

/// Pixel size of plain text on a surface `width` pixels wide.
pub fn plain_font_size(width: u32) -> u32 {
    (width / 15).max(16)
}

/// Pixel size of a tier relative to `base`, truncated.
pub fn tier_size(tier: FontSizeTier, base: u32) -> u32 {
    (f64::from(base) * tier.multiplier()) as u32
}

/// Shared inputs of one text pass.
pub struct TextPass<'a> {
    /// Font lookup for this render.
    pub resolver: &'a FontResolver,
    /// Palette used for color fallbacks.
    pub palette: &'a Palette,
    /// Resolved zone.
    pub zone: TextZone,
}

impl TextPass<'_> {
    /// Render rich text if it has blocks, else `plain` if non-empty. Returns the final cursor.
    pub fn render(
        &self,
        surface: &mut RgbImage,
        rich: Option<&RichTextContent>,
        plain: &str,
        report: &mut RenderReport,
    ) -> i64 {
        match rich.filter(|r| !r.blocks.is_empty()) {
            Some(content) => self.render_rich(surface, content, report),
            None if !plain.is_empty() => self.render_plain(surface, plain, report),
            None => self.zone.y_start,
        }
    }

    /// Render blocks in order, threading a vertical cursor through them.
    #[tracing::instrument(level = "debug", skip_all, fields(blocks = content.blocks.len()))]
    pub fn render_rich(
        &self,
        surface: &mut RgbImage,
        content: &RichTextContent,
        report: &mut RenderReport,
    ) -> i64 {
        let base = rich_base_size(surface.width());
        let mut y = self.zone.y_start;
        for block in &content.blocks {
            let face = self.resolver.resolve(tier_size(block.style.font_size, base));
            let color = block
                .style
                .color
                .unwrap_or_else(|| self.palette.text_color());
            y = self.render_block(surface, &block.text, y, &face, color, &block.style, report);
            y += BLOCK_GAP;
        }
        y
    }

    /// Render `text` with one size, direction and alignment taken from the zone.
    pub fn render_plain(&self, surface: &mut RgbImage, text: &str, report: &mut RenderReport) -> i64 {
        let face = self.resolver.resolve(plain_font_size(surface.width()));
        let style = TextStyle {
            alignment: self.zone.alignment,
            direction: self.zone.direction,
            ..TextStyle::default()
        };
        self.render_block(
            surface,
            text,
            self.zone.y_start,
            &face,
            self.palette.text_color(),
            &style,
            report,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn render_block(
        &self,
        surface: &mut RgbImage,
        text: &str,
        y: i64,
        face: &Face<'_>,
        color: Rgb8,
        style: &TextStyle,
        report: &mut RenderReport,
    ) -> i64 {
        let glyph_style = GlyphStyle {
            weight: style.weight,
            slant: style.slant,
        };
        let align: TextAlign = style.alignment;
        match style.direction {
            TextDirection::Vertical => {
                let out = layout_vertical(text, &self.zone, y, face, align);
                if out.dropped > 0 {
                    report.record(Degradation::TextTruncated {
                        kept: out.glyphs.len(),
                        dropped: out.dropped,
                    });
                }
                draw_glyphs(surface, face, &out.glyphs, color, glyph_style);
                out.next_y
            }
            TextDirection::Horizontal => {
                let out = layout_horizontal(text, &self.zone, y, face, align);
                draw_glyphs(surface, face, &out.glyphs, color, glyph_style);
                out.next_y
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/rich.rs"]
mod tests;
