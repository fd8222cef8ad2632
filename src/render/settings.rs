use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::foundation::error::{BookmarkError, BookmarkResult};

/// Longest canvas side, in pixels, accepted at either DPI.
pub const MAX_CANVAS_SIDE_PX: u32 = 16_384;

/// Physical print geometry and output resolutions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Trimmed width in millimetres.
    pub width_mm: f64,
    /// Trimmed height in millimetres.
    pub height_mm: f64,
    /// Bleed on each side in millimetres.
    pub bleed_mm: f64,
    /// Safe margin inside the trim line in millimetres.
    pub safe_margin_mm: f64,
    /// Preview resolution.
    pub preview_dpi: u32,
    /// Print resolution.
    pub final_dpi: u32,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            width_mm: 60.0,
            height_mm: 180.0,
            bleed_mm: 3.0,
            safe_margin_mm: 5.0,
            preview_dpi: 72,
            final_dpi: 300,
        }
    }
}

impl PrintSettings {
    /// Reject non-positive sizes, zero DPI and canvases larger than [`MAX_CANVAS_SIDE_PX`].
    pub fn validate(&self) -> BookmarkResult<()> {
        let finite_pos = |v: f64| v.is_finite() && v > 0.0;
        if !finite_pos(self.width_mm) || !finite_pos(self.height_mm) {
            return Err(BookmarkError::validation(
                "print width_mm and height_mm must be positive",
            ));
        }
        for (name, v) in [("bleed_mm", self.bleed_mm), ("safe_margin_mm", self.safe_margin_mm)] {
            if !v.is_finite() || v < 0.0 {
                return Err(BookmarkError::validation(format!(
                    "print {name} must be >= 0"
                )));
            }
        }
        if self.preview_dpi == 0 || self.final_dpi == 0 {
            return Err(BookmarkError::validation("dpi must be > 0"));
        }
        for canvas in [Canvas::preview(self), Canvas::final_output(self)] {
            let side = canvas.width.max(canvas.height);
            if side > MAX_CANVAS_SIDE_PX {
                return Err(BookmarkError::validation(format!(
                    "canvas side of {side} px at {} dpi exceeds {MAX_CANVAS_SIDE_PX} px",
                    canvas.dpi
                )));
            }
        }
        Ok(())
    }
}

impl Canvas {
    /// Preview geometry: content area only, at the preview DPI.
    pub fn preview(print: &PrintSettings) -> Self {
        Self::from_physical(
            print.width_mm,
            print.height_mm,
            0.0,
            print.safe_margin_mm,
            print.preview_dpi,
        )
    }

    /// Print geometry: content padded by bleed, at the final DPI.
    pub fn final_output(print: &PrintSettings) -> Self {
        Self::from_physical(
            print.width_mm,
            print.height_mm,
            print.bleed_mm,
            print.safe_margin_mm,
            print.final_dpi,
        )
    }
}

/// Ordered font search list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Candidate font files, CJK-capable families first.
    pub paths: Vec<PathBuf>,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Well-known font locations on macOS, Linux and Windows. Latin-only fallback last.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Supplemental/Songti.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simhei.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Everything a render needs besides the design itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Print geometry.
    pub print: PrintSettings,
    /// Font search list.
    pub fonts: FontSettings,
    /// Outline the trim line and safe margin on final output.
    pub draw_guides: bool,
}

impl RenderSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BookmarkResult<Self> {
        let settings: Self =
            serde_json::from_str(s).map_err(|e| BookmarkError::serde(e.to_string()))?;
        settings.print.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file.
    pub fn from_json_path(path: &Path) -> BookmarkResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Settings whose font list is empty, so text always uses the built-in glyphs.
    pub fn without_fonts() -> Self {
        Self {
            fonts: FontSettings { paths: Vec::new() },
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
