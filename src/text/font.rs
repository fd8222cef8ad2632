use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::design::model::{FontSlant, FontWeight};
use crate::foundation::core::Rgb8;
use crate::render::composite::blend_pixel;
use crate::text::builtin;

/// Horizontal shear applied per row of ink for synthetic italics.
const ITALIC_SHEAR: f32 = 0.2;

/// First path in `paths` accepted by `exists`.
///
/// Pure over its inputs so platform lookups can be tested with an injected predicate.
pub fn select_font_path<'a>(
    paths: &'a [PathBuf],
    exists: impl Fn(&Path) -> bool,
) -> Option<&'a Path> {
    paths.iter().map(PathBuf::as_path).find(|p| exists(p))
}

struct LoadedFont {
    path: PathBuf,
    font: fontdue::Font,
}

/// Resolves a glyph source for one render.
///
/// Walks the ordered font path list and keeps the first file that exists and parses. When none
/// does, every [`Face`] it hands out uses the built-in bitmap glyphs. The parsed font is kept for
/// the lifetime of the resolver, so each render pays for the file read once.
pub struct FontResolver {
    paths: Vec<PathBuf>,
    exists: fn(&Path) -> bool,
    loaded: OnceCell<Option<LoadedFont>>,
}

impl FontResolver {
    /// Resolver over `paths`, checked against the real filesystem.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self::with_predicate(paths, Path::exists)
    }

    /// Resolver with an injected existence check.
    pub fn with_predicate(paths: Vec<PathBuf>, exists: fn(&Path) -> bool) -> Self {
        Self {
            paths,
            exists,
            loaded: OnceCell::new(),
        }
    }

    /// Face for `px` pixels.
    pub fn resolve(&self, px: u32) -> Face<'_> {
        let loaded = self
            .loaded
            .get_or_init(|| load_first(&self.paths, self.exists));
        let source = match loaded {
            Some(l) => FaceSource::Outline(&l.font),
            None => FaceSource::Builtin,
        };
        Face {
            source,
            px: px.max(1),
        }
    }

    /// `true` once a lookup has happened and found no usable font file.
    pub fn used_fallback(&self) -> bool {
        matches!(self.loaded.get(), Some(None))
    }

    /// Path of the loaded font file, if a lookup succeeded.
    pub fn loaded_path(&self) -> Option<&Path> {
        self.loaded.get()?.as_ref().map(|l| l.path.as_path())
    }
}

fn load_first(paths: &[PathBuf], exists: fn(&Path) -> bool) -> Option<LoadedFont> {
    for path in paths.iter().filter(|p| exists(p)) {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "font read failed");
                continue;
            }
        };
        match fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()) {
            Ok(font) => {
                tracing::debug!(path = %path.display(), "font loaded");
                return Some(LoadedFont {
                    path: path.clone(),
                    font,
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = e, "font parse failed");
            }
        }
    }
    tracing::warn!("no usable font file; using built-in glyphs without CJK coverage");
    None
}

#[derive(Clone, Copy)]
enum FaceSource<'a> {
    Outline(&'a fontdue::Font),
    Builtin,
}

/// Glyph coverage relative to the top-left of the text box it is drawn into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBitmap {
    /// Horizontal offset of the bitmap from the pen position.
    pub left: i64,
    /// Vertical offset of the bitmap from the top of the text box.
    pub top: i64,
    /// Bitmap width.
    pub width: u32,
    /// Bitmap height.
    pub height: u32,
    /// Row-major coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

/// Synthetic style applied while drawing glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphStyle {
    /// Weight.
    pub weight: FontWeight,
    /// Slant.
    pub slant: FontSlant,
}

/// A glyph source at one pixel size.
#[derive(Clone, Copy)]
pub struct Face<'a> {
    source: FaceSource<'a>,
    px: u32,
}

impl Face<'_> {
    /// Nominal pixel size.
    pub fn px(&self) -> u32 {
        self.px
    }

    /// Whether glyphs come from the built-in bitmap table.
    pub fn is_builtin(&self) -> bool {
        matches!(self.source, FaceSource::Builtin)
    }

    fn builtin_scale(&self) -> u32 {
        (self.px / builtin::CELL_HEIGHT).max(1)
    }

    /// Advance width of `ch` in whole pixels.
    pub fn advance(&self, ch: char) -> u32 {
        match self.source {
            FaceSource::Outline(font) => {
                font.metrics(ch, self.px as f32).advance_width.round().max(0.0) as u32
            }
            FaceSource::Builtin => builtin::CELL_WIDTH * self.builtin_scale(),
        }
    }

    /// Width of `text` as the sum of its advances.
    pub fn measure(&self, text: &str) -> u32 {
        text.chars().map(|c| self.advance(c)).sum()
    }

    /// Coverage bitmap for `ch`.
    pub fn rasterize(&self, ch: char) -> GlyphBitmap {
        match self.source {
            FaceSource::Outline(font) => {
                let px = self.px as f32;
                let ascent = font
                    .horizontal_line_metrics(px)
                    .map_or(px * 0.8, |m| m.ascent);
                let (m, coverage) = font.rasterize(ch, px);
                let glyph_top = m.ymin as f32 + m.height as f32;
                GlyphBitmap {
                    left: i64::from(m.xmin),
                    top: (ascent - glyph_top).round() as i64,
                    width: m.width as u32,
                    height: m.height as u32,
                    coverage,
                }
            }
            FaceSource::Builtin => {
                let s = self.builtin_scale();
                let (w, h) = (builtin::INK_WIDTH * s, builtin::INK_HEIGHT * s);
                let mut coverage = Vec::with_capacity((w * h) as usize);
                for y in 0..h {
                    for x in 0..w {
                        let on = builtin::ink(ch, x / s, y / s);
                        coverage.push(if on { 255 } else { 0 });
                    }
                }
                GlyphBitmap {
                    left: 0,
                    top: 0,
                    width: w,
                    height: h,
                    coverage,
                }
            }
        }
    }

    /// Draw `ch` with its text box's top-left at (`x`, `y`).
    ///
    /// Bold strikes the glyph twice with a small horizontal offset; italic shears rows to the
    /// right with distance from the baseline. Neither changes the advance.
    pub fn draw(&self, surface: &mut RgbImage, ch: char, x: i64, y: i64, color: Rgb8, style: GlyphStyle) {
        let glyph = self.rasterize(ch);
        let strikes: &[i64] = match style.weight {
            FontWeight::Normal => &[0],
            FontWeight::Bold => &[0, i64::from((self.px / 24).max(1))],
        };
        for &dx in strikes {
            for gy in 0..glyph.height {
                let shear = match style.slant {
                    FontSlant::Normal => 0,
                    FontSlant::Italic => {
                        ((glyph.height - 1 - gy) as f32 * ITALIC_SHEAR).round() as i64
                    }
                };
                let row = (gy * glyph.width) as usize;
                for gx in 0..glyph.width {
                    let cov = glyph.coverage[row + gx as usize];
                    blend_pixel(
                        surface,
                        x + glyph.left + i64::from(gx) + shear + dx,
                        y + glyph.top + i64::from(gy),
                        color,
                        cov,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
