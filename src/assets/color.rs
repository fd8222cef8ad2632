use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BookmarkError, BookmarkResult};

/// Parse a `#RRGGBB` (or `RRGGBB`) hex string.
pub fn parse_hex(s: &str) -> BookmarkResult<Rgb8> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(BookmarkError::validation(format!(
            "hex color must be #RRGGBB, got \"{s}\""
        )));
    }

    fn hex_byte(pair: &str) -> BookmarkResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| BookmarkError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    Ok(Rgb8::new(
        hex_byte(&digits[0..2])?,
        hex_byte(&digits[2..4])?,
        hex_byte(&digits[4..6])?,
    ))
}

/// Brighten each channel by `percent`, saturating at 255.
pub fn lighten(color: Rgb8, percent: u32) -> Rgb8 {
    let factor = 1.0 + f64::from(percent) / 100.0;
    let ch = |c: u8| (f64::from(c) * factor).min(255.0) as u8;
    Rgb8::new(ch(color.r), ch(color.g), ch(color.b))
}

/// Scale each channel by `factor` in `[0, 1]`, truncating.
pub(crate) fn darken(color: Rgb8, factor: f64) -> Rgb8 {
    let factor = factor.clamp(0.0, 1.0);
    let ch = |c: u8| (f64::from(c) * factor) as u8;
    Rgb8::new(ch(color.r), ch(color.g), ch(color.b))
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
