/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Convert a physical length in millimetres to fractional pixels at `dpi`.
pub fn mm_to_px(mm: f64, dpi: u32) -> f64 {
    mm / MM_PER_INCH * f64::from(dpi)
}

/// Opaque sRGB color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default dark-gray text color.
    pub const DARK_GRAY: Self = Self::new(0x33, 0x33, 0x33);

    /// Neutral light-gray used for placeholder outlines.
    pub const LIGHT_GRAY: Self = Self::new(0xCC, 0xCC, 0xCC);

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert into an `image` pixel.
    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb(self.to_array())
    }

    /// Uppercase `#RRGGBB` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Axis-aligned pixel rectangle (`x`,`y` is the top-left corner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Construct a rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

/// Pixel geometry of one render target.
///
/// All pixel values are floor-converted from physical millimetres at `dpi`. The content area is
/// the canvas inset by `bleed` on every side; a preview canvas has no bleed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Full canvas width including bleed.
    pub width: u32,
    /// Full canvas height including bleed.
    pub height: u32,
    /// Dots per inch used for the conversion.
    pub dpi: u32,
    /// Bleed width in pixels on each side.
    pub bleed: u32,
    /// Safe-margin inset from the trim line in pixels.
    pub safe_margin: u32,
}

impl Canvas {
    /// Derive a canvas from physical dimensions.
    ///
    /// Content size, bleed and safe margin are floored independently, matching how a print
    /// shop computes trim size first and pads it afterwards.
    pub fn from_physical(
        width_mm: f64,
        height_mm: f64,
        bleed_mm: f64,
        safe_margin_mm: f64,
        dpi: u32,
    ) -> Self {
        let content_w = floor_px(width_mm, dpi);
        let content_h = floor_px(height_mm, dpi);
        let bleed = floor_px(bleed_mm, dpi);
        Self {
            width: content_w.saturating_add(bleed.saturating_mul(2)),
            height: content_h.saturating_add(bleed.saturating_mul(2)),
            dpi,
            bleed,
            safe_margin: floor_px(safe_margin_mm, dpi),
        }
    }

    /// Width of the trimmed content area.
    pub fn content_width(&self) -> u32 {
        self.width.saturating_sub(self.bleed.saturating_mul(2))
    }

    /// Height of the trimmed content area.
    pub fn content_height(&self) -> u32 {
        self.height.saturating_sub(self.bleed.saturating_mul(2))
    }

    /// Content area in canvas coordinates.
    pub fn content_rect(&self) -> PixelRect {
        PixelRect::new(
            self.bleed,
            self.bleed,
            self.content_width(),
            self.content_height(),
        )
    }
}

fn floor_px(mm: f64, dpi: u32) -> u32 {
    mm_to_px(mm, dpi).floor().max(0.0) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
