use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BookmarkError, BookmarkResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Mood tag of a design. Accepts the English tag or the Chinese label.
pub enum Mood {
    /// Warm and healing.
    #[serde(alias = "温暖治愈")]
    Warm,
    /// Fresh and natural.
    #[serde(alias = "清新自然")]
    Fresh,
    /// Professional and minimal.
    #[serde(alias = "专业简约")]
    Professional,
    /// Playful and cute.
    #[serde(alias = "活泼可爱")]
    Playful,
    /// Elegant and vintage.
    #[serde(alias = "优雅复古")]
    Elegant,
    /// Modern and fashionable.
    #[serde(alias = "现代时尚")]
    Modern,
    /// Artistic and literary.
    #[serde(alias = "艺术文艺")]
    Artistic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
/// Decoration tier in `1..=5`.
pub struct Complexity(u8);

impl Complexity {
    /// Lowest tier.
    pub const MIN: Self = Self(1);
    /// Highest tier.
    pub const MAX: Self = Self(5);

    /// Validate a tier value.
    pub fn new(tier: u8) -> BookmarkResult<Self> {
        if !(1..=5).contains(&tier) {
            return Err(BookmarkError::validation(format!(
                "complexity must be in 1..=5, got {tier}"
            )));
        }
        Ok(Self(tier))
    }

    /// Map a continuous score (the 1–10 slider of the final form) to a tier.
    ///
    /// The score is truncated toward zero, then clamped into `1..=5`.
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            return Self::MIN;
        }
        Self(score.trunc().clamp(1.0, 5.0) as u8)
    }

    /// Raw tier value.
    pub fn tier(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Complexity {
    type Error = BookmarkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Complexity> for u8 {
    fn from(value: Complexity) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Layout archetype; decides where text goes and what the preview sketches.
pub enum LayoutArchetype {
    /// Photo left, text right.
    LeftRight,
    /// Photo top, text bottom.
    TopBottom,
    /// Centered panel with text in its lower band.
    CenterFocused,
    /// 2×2 photo grid with a bottom text band.
    MosaicGrid,
    /// Full-bleed photo with a bottom text band.
    FullBleedImage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb8>", into = "Vec<Rgb8>")]
/// Ordered, non-empty palette. Index 0 is the base tone, later entries are accents.
pub struct Palette(Vec<Rgb8>);

impl Palette {
    /// Maximum number of colors a design may carry.
    pub const MAX_COLORS: usize = 4;

    /// Build a palette; it must contain at least one color.
    pub fn new(colors: Vec<Rgb8>) -> BookmarkResult<Self> {
        if colors.is_empty() {
            return Err(BookmarkError::validation(
                "palette must contain at least one color",
            ));
        }
        Ok(Self(colors))
    }

    /// Parse a palette from hex strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> BookmarkResult<Self> {
        let parsed = colors
            .iter()
            .map(|c| crate::assets::color::parse_hex(c.as_ref()))
            .collect::<BookmarkResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// All colors in order.
    pub fn colors(&self) -> &[Rgb8] {
        &self.0
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Base (background) tone.
    pub fn base(&self) -> Rgb8 {
        self.0[0]
    }

    /// Last color of the palette.
    pub fn last(&self) -> Rgb8 {
        self.0[self.0.len() - 1]
    }

    /// Color at `idx`, or at `fallback` when `idx` is out of range.
    pub fn get_or(&self, idx: usize, fallback: usize) -> Rgb8 {
        self.0
            .get(idx)
            .or_else(|| self.0.get(fallback))
            .copied()
            .unwrap_or_else(|| self.base())
    }

    /// Color at `idx`, wrapping around the palette.
    pub fn cyclic(&self, idx: usize) -> Rgb8 {
        self.0[idx % self.0.len()]
    }

    /// Accent color: palette[1] when present, else the base.
    pub fn accent(&self) -> Rgb8 {
        self.get_or(1, 0)
    }

    /// Default text color: the last color when the palette has at least two entries.
    pub fn text_color(&self) -> Rgb8 {
        if self.0.len() > 1 {
            self.last()
        } else {
            Rgb8::DARK_GRAY
        }
    }
}

impl TryFrom<Vec<Rgb8>> for Palette {
    type Error = BookmarkError;

    fn try_from(value: Vec<Rgb8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Palette> for Vec<Rgb8> {
    fn from(value: Palette) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal alignment of a line or column block inside its zone.
pub enum TextAlign {
    /// Flush left (with the fixed left padding for horizontal text).
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Writing direction.
pub enum TextDirection {
    /// Word-wrapped rows.
    #[default]
    Horizontal,
    /// Top-to-bottom columns laid out left to right.
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Relative font size tier.
pub enum FontSizeTier {
    /// 0.7× the base size.
    Small,
    /// 1.0× the base size.
    #[default]
    Medium,
    /// 1.4× the base size.
    Large,
    /// 1.8× the base size.
    #[serde(rename = "xlarge")]
    XLarge,
}

impl FontSizeTier {
    /// Multiplier applied to the base pixel size.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Small => 0.7,
            Self::Medium => 1.0,
            Self::Large => 1.4,
            Self::XLarge => 1.8,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Font weight.
pub enum FontWeight {
    /// Regular strokes.
    #[default]
    Normal,
    /// Synthetic bold.
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Font slant.
pub enum FontSlant {
    /// Upright.
    #[default]
    Normal,
    /// Synthetic italic.
    Italic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Per-block text style.
pub struct TextStyle {
    /// Size tier.
    #[serde(default)]
    pub font_size: FontSizeTier,
    /// Weight.
    #[serde(default, rename = "font_weight")]
    pub weight: FontWeight,
    /// Slant.
    #[serde(default, rename = "font_style")]
    pub slant: FontSlant,
    /// Text color; `None` falls back to the palette's text color.
    #[serde(default)]
    pub color: Option<Rgb8>,
    /// Alignment inside the zone.
    #[serde(default)]
    pub alignment: TextAlign,
    /// Writing direction.
    #[serde(default)]
    pub direction: TextDirection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A run of text with one style.
pub struct TextBlock {
    /// Text content.
    pub text: String,
    /// Style applied to the whole block.
    #[serde(default)]
    pub style: TextStyle,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered blocks rendered one after another down the text zone.
pub struct RichTextContent {
    /// Blocks in render order.
    pub blocks: Vec<TextBlock>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Gradient geometry.
pub enum GradientDirection {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Center outward.
    Radial,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How an image is fitted to a target rectangle.
pub enum FitMode {
    /// Smart center crop, then scale.
    #[default]
    Cover,
    /// Scale along the constraining axis, then center-crop the overflow (no letterboxing).
    Contain,
    /// Resize without preserving the aspect ratio.
    Stretch,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", try_from = "BackgroundWire")]
/// Content-area background.
///
/// Deserializes from the flat `{"type": "solid", "color": ...}` form or from the nested
/// `{"background_type": "solid", "solid": {"color": ...}}` form. Serializes flat.
pub enum BackgroundSpec {
    /// Flat fill.
    Solid {
        /// Fill color.
        color: Rgb8,
    },
    /// Multi-stop gradient.
    Gradient {
        /// Geometry.
        direction: GradientDirection,
        /// Two or three stops.
        colors: Vec<Rgb8>,
        /// Requested angle in degrees. The four fixed geometries do not consult it.
        angle: f64,
    },
    /// Image blended over the existing content.
    Image {
        /// Local image path.
        path: PathBuf,
        /// Opacity in `[0, 1]`.
        opacity: f32,
        /// Fit policy.
        fit_mode: FitMode,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BackgroundWire {
    Flat(FlatBackground),
    Nested(NestedBackground),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum FlatBackground {
    Solid(SolidFields),
    Gradient(GradientFields),
    Image(ImageFields),
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum BackgroundKind {
    Solid,
    Gradient,
    Image,
}

#[derive(Deserialize)]
struct NestedBackground {
    #[serde(alias = "backgroundType")]
    background_type: BackgroundKind,
    #[serde(default)]
    solid: Option<SolidFields>,
    #[serde(default)]
    gradient: Option<GradientFields>,
    #[serde(default)]
    image: Option<ImageFields>,
}

#[derive(Deserialize)]
struct SolidFields {
    color: Rgb8,
}

#[derive(Deserialize)]
struct GradientFields {
    #[serde(default)]
    direction: GradientDirection,
    colors: Vec<Rgb8>,
    #[serde(default = "default_gradient_angle")]
    angle: f64,
}

#[derive(Deserialize)]
struct ImageFields {
    #[serde(alias = "image_path", alias = "imagePath")]
    path: PathBuf,
    #[serde(default = "default_opacity")]
    opacity: f32,
    #[serde(default, alias = "fitMode")]
    fit_mode: FitMode,
}

impl From<SolidFields> for BackgroundSpec {
    fn from(f: SolidFields) -> Self {
        Self::Solid { color: f.color }
    }
}

impl From<GradientFields> for BackgroundSpec {
    fn from(f: GradientFields) -> Self {
        Self::Gradient {
            direction: f.direction,
            colors: f.colors,
            angle: f.angle,
        }
    }
}

impl From<ImageFields> for BackgroundSpec {
    fn from(f: ImageFields) -> Self {
        Self::Image {
            path: f.path,
            opacity: f.opacity,
            fit_mode: f.fit_mode,
        }
    }
}

impl BackgroundWire {
    /// Fails with the selected kind when a nested form omits that kind's settings object.
    fn into_spec(self) -> Result<BackgroundSpec, BackgroundKind> {
        match self {
            Self::Flat(FlatBackground::Solid(f)) => Ok(f.into()),
            Self::Flat(FlatBackground::Gradient(f)) => Ok(f.into()),
            Self::Flat(FlatBackground::Image(f)) => Ok(f.into()),
            Self::Nested(n) => match n.background_type {
                BackgroundKind::Solid => n.solid.map(Into::into),
                BackgroundKind::Gradient => n.gradient.map(Into::into),
                BackgroundKind::Image => n.image.map(Into::into),
            }
            .ok_or(n.background_type),
        }
    }
}

impl TryFrom<BackgroundWire> for BackgroundSpec {
    type Error = String;

    fn try_from(wire: BackgroundWire) -> Result<Self, Self::Error> {
        wire.into_spec().map_err(|kind| {
            format!("background_type is {kind:?} but its settings object is missing")
        })
    }
}

/// Request-level background: a nested form without settings for its kind means no background.
fn deserialize_background<'de, D>(de: D) -> Result<Option<BackgroundSpec>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let Some(wire) = Option::<BackgroundWire>::deserialize(de)? else {
        return Ok(None);
    };
    match wire.into_spec() {
        Ok(spec) => Ok(Some(spec)),
        Err(kind) => {
            tracing::debug!(?kind, "background settings missing for selected kind; ignoring");
            Ok(None)
        }
    }
}

fn default_gradient_angle() -> f64 {
    90.0
}

fn default_opacity() -> f32 {
    1.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Caller-specified text zone; replaces the archetype's default zone entirely.
pub struct TextZoneOverride {
    /// Top margin in pixels (also the zone's top edge).
    #[serde(default = "default_margin")]
    pub top_margin: u32,
    /// Bottom margin in pixels.
    #[serde(default = "default_margin")]
    pub bottom_margin: u32,
    /// Left margin in pixels (also the zone's left edge).
    #[serde(default = "default_margin")]
    pub left_margin: u32,
    /// Right margin in pixels.
    #[serde(default = "default_margin")]
    pub right_margin: u32,
    /// Explicit zone width; `None` or `0` means derived from the direction.
    #[serde(default)]
    pub width: Option<u32>,
    /// Explicit zone height; `None` or `0` means canvas height minus margins.
    #[serde(default)]
    pub height: Option<u32>,
    /// Alignment for plain text.
    #[serde(default)]
    pub alignment: TextAlign,
    /// Direction for plain text.
    #[serde(default)]
    pub direction: TextDirection,
}

fn default_margin() -> u32 {
    40
}

impl Default for TextZoneOverride {
    fn default() -> Self {
        Self {
            top_margin: 40,
            bottom_margin: 40,
            left_margin: 40,
            right_margin: 40,
            width: None,
            height: None,
            alignment: TextAlign::Center,
            direction: TextDirection::Horizontal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Everything needed to render one final bookmark.
pub struct DesignRequest {
    /// Mood tag.
    pub mood: Mood,
    /// Decoration tier.
    pub complexity: Complexity,
    /// Palette of one to four colors.
    pub colors: Palette,
    /// Layout archetype.
    pub layout: LayoutArchetype,
    /// Plain text, used when no rich text is supplied.
    #[serde(default)]
    pub user_text: String,
    /// Rich text blocks.
    #[serde(default)]
    pub rich_text: Option<RichTextContent>,
    /// Background; `None` fills with palette[0].
    #[serde(default, deserialize_with = "deserialize_background")]
    pub background: Option<BackgroundSpec>,
    /// Text zone override.
    #[serde(default, alias = "text_position")]
    pub text_zone: Option<TextZoneOverride>,
    /// Opt in to decorative ornaments.
    #[serde(default)]
    pub show_borders: bool,
}

impl DesignRequest {
    /// Minimal request with no text, background or ornaments.
    pub fn new(
        mood: Mood,
        complexity: Complexity,
        colors: Palette,
        layout: LayoutArchetype,
    ) -> Self {
        Self {
            mood,
            complexity,
            colors,
            layout,
            user_text: String::new(),
            rich_text: None,
            background: None,
            text_zone: None,
            show_borders: false,
        }
    }

    /// Parse and validate a request from JSON.
    pub fn from_json_str(s: &str) -> BookmarkResult<Self> {
        let req: Self = serde_json::from_str(s).map_err(|e| BookmarkError::serde(e.to_string()))?;
        req.validate()?;
        Ok(req)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/model.rs"]
mod tests;
