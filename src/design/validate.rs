use crate::design::model::{BackgroundSpec, DesignRequest, Palette};
use crate::foundation::error::{BookmarkError, BookmarkResult};

/// Maximum accepted length (in characters) of the plain user text.
pub const MAX_USER_TEXT_CHARS: usize = 500;

impl DesignRequest {
    /// Check the request against the caller-facing contract.
    ///
    /// The render core assumes a request that passed this check.
    pub fn validate(&self) -> BookmarkResult<()> {
        validate_palette(&self.colors)?;

        let text_chars = self.user_text.chars().count();
        if text_chars > MAX_USER_TEXT_CHARS {
            return Err(BookmarkError::validation(format!(
                "user_text must be at most {MAX_USER_TEXT_CHARS} characters, got {text_chars}"
            )));
        }

        if let Some(rich) = &self.rich_text
            && rich.blocks.is_empty()
        {
            return Err(BookmarkError::validation(
                "rich_text must contain at least one block",
            ));
        }

        if let Some(bg) = &self.background {
            validate_background(bg)?;
        }
        Ok(())
    }
}

/// A palette carries between one and [`Palette::MAX_COLORS`] colors.
pub fn validate_palette(palette: &Palette) -> BookmarkResult<()> {
    if palette.len() > Palette::MAX_COLORS {
        return Err(BookmarkError::validation(format!(
            "palette must contain at most {} colors, got {}",
            Palette::MAX_COLORS,
            palette.len()
        )));
    }
    Ok(())
}

fn validate_background(bg: &BackgroundSpec) -> BookmarkResult<()> {
    match bg {
        BackgroundSpec::Solid { .. } => Ok(()),
        BackgroundSpec::Gradient { colors, angle, .. } => {
            if !(2..=3).contains(&colors.len()) {
                return Err(BookmarkError::validation(format!(
                    "gradient needs 2 or 3 colors, got {}",
                    colors.len()
                )));
            }
            if !(0.0..=360.0).contains(angle) {
                return Err(BookmarkError::validation(format!(
                    "gradient angle must be in [0, 360], got {angle}"
                )));
            }
            Ok(())
        }
        BackgroundSpec::Image { opacity, path, .. } => {
            if !(0.0..=1.0).contains(opacity) {
                return Err(BookmarkError::validation(format!(
                    "image opacity must be in [0, 1], got {opacity}"
                )));
            }
            if path.as_os_str().is_empty() {
                return Err(BookmarkError::validation("image path must be non-empty"));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/validate.rs"]
mod tests;
