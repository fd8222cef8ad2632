//! Bookmarker composes printable bookmarks from a structured design request.
//!
//! Two entry points cover the whole engine:
//!
//! - [`render_preview`] paints a low-DPI sketch of a layout archetype with its ornaments
//! - [`render_final`] renders the print-ready card with bleed and encodes it as PNG and PDF
//!
//! Backgrounds can be flat, gradient or image based; text is laid out horizontally with
//! character-granular wrapping or vertically in CJK-style columns. Missing fonts and images
//! degrade the render instead of failing it, and every degradation is listed in the returned
//! [`RenderReport`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod design;
mod encode;
mod foundation;
mod render;
mod text;

pub use crate::assets::color::{lighten, parse_hex};
pub use crate::assets::decode::{decode_rgba, load_rgba};
pub use crate::design::model::{
    BackgroundSpec, Complexity, DesignRequest, FitMode, FontSizeTier, FontSlant, FontWeight,
    GradientDirection, LayoutArchetype, Mood, Palette, RichTextContent, TextAlign, TextBlock,
    TextDirection, TextStyle, TextZoneOverride,
};
pub use crate::design::validate::{MAX_USER_TEXT_CHARS, validate_palette};
pub use crate::encode::pdf::{PdfImage, encode_pdf, inspect_pdf};
pub use crate::encode::png::{RasterInfo, encode_png, read_png_info};
pub use crate::foundation::core::{Canvas, MM_PER_INCH, PixelRect, Rgb8, mm_to_px};
pub use crate::foundation::error::{BookmarkError, BookmarkResult};
pub use crate::render::background::{
    PhotoStatus, StageStatus, apply_user_photo, draw_background, draw_image_background,
    fill_solid,
};
pub use crate::render::fit::{RATIO_TOLERANCE, fit_to_zone, fit_with_mode};
pub use crate::render::gradient::{fill_gradient, gradient, gradient_ratio, interpolate};
pub use crate::render::ornament::{
    Ornament, OrnamentKind, OrnamentShape, draw_ornaments, paint_ornaments, plan_ornaments,
};
pub use crate::render::pipeline::{FinalOutput, Preview, draw_guides, render_final, render_preview};
pub use crate::render::report::{Degradation, RenderReport};
pub use crate::render::settings::{
    DEFAULT_FONT_PATHS, FontSettings, MAX_CANVAS_SIDE_PX, PrintSettings, RenderSettings,
};
pub use crate::render::sketch::draw_layout_sketch;
pub use crate::text::font::{Face, FontResolver, GlyphBitmap, GlyphStyle, select_font_path};
pub use crate::text::layout::{
    BLOCK_GAP, HorizontalLayout, LEFT_PADDING, LINE_GAP, MAX_CHARS_PER_COLUMN, MAX_COLUMNS,
    MAX_VERTICAL_CHARS, MIN_COLUMN_PITCH, PlacedGlyph, VerticalLayout, WRAP_PADDING, draw_glyphs,
    layout_horizontal, layout_vertical, wrap_lines,
};
pub use crate::text::rich::{TextPass, plain_font_size, rich_base_size, tier_size};
pub use crate::text::zone::{TextZone, resolve_text_zone};
