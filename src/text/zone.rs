use crate::design::model::{LayoutArchetype, TextAlign, TextDirection, TextZoneOverride};

/// Rectangle reserved for text, plus the alignment and direction used for plain text.
///
/// Coordinates are signed: a tiny canvas can legitimately produce an empty or negative-width
/// zone, which layout treats as "every character overflows".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextZone {
    /// Left edge.
    pub x_start: i64,
    /// Top edge; also where the first text block starts.
    pub y_start: i64,
    /// Zone width.
    pub width: i64,
    /// Zone height.
    pub height: i64,
    /// Alignment for plain text.
    pub alignment: TextAlign,
    /// Direction for plain text.
    pub direction: TextDirection,
}

/// Resolve the text zone for a `width`×`height` surface.
///
/// An override replaces the archetype's zone entirely.
pub fn resolve_text_zone(
    width: u32,
    height: u32,
    layout: LayoutArchetype,
    zone_override: Option<&TextZoneOverride>,
) -> TextZone {
    let (w, h) = (i64::from(width), i64::from(height));
    if let Some(o) = zone_override {
        return from_override(w, h, o);
    }

    let (x_start, y_start, zone_w, zone_h) = match layout {
        LayoutArchetype::LeftRight => {
            let text_x = (w as f64 * 0.48) as i64 + 20;
            (text_x, 40, w - text_x - 40, h - 40)
        }
        LayoutArchetype::TopBottom => {
            let split = (h as f64 * 0.58) as i64;
            (20, split + 40, w - 40, h - split - 20)
        }
        LayoutArchetype::CenterFocused => {
            let margin = (w as f64 * 0.15) as i64;
            let y = margin + ((h - 2 * margin) as f64 * 0.65) as i64;
            (margin + 20, y, w - 2 * margin - 40, h - y - 20)
        }
        LayoutArchetype::MosaicGrid | LayoutArchetype::FullBleedImage => {
            let band = (h as f64 * 0.25) as i64;
            (20, h - band, w - 40, band - 20)
        }
    };

    TextZone {
        x_start,
        y_start,
        width: zone_w,
        height: zone_h,
        alignment: TextAlign::Center,
        direction: TextDirection::Horizontal,
    }
}

fn from_override(w: i64, h: i64, o: &TextZoneOverride) -> TextZone {
    let left = i64::from(o.left_margin);
    let top = i64::from(o.top_margin);
    let width = match o.width.filter(|&v| v != 0) {
        Some(v) => i64::from(v),
        None => match o.direction {
            TextDirection::Vertical => w - left - i64::from(o.right_margin),
            TextDirection::Horizontal => (w as f64 * 0.8) as i64,
        },
    };
    let height = match o.height.filter(|&v| v != 0) {
        Some(v) => i64::from(v),
        None => h - top - i64::from(o.bottom_margin),
    };
    TextZone {
        x_start: left,
        y_start: top,
        width,
        height,
        alignment: o.alignment,
        direction: o.direction,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/zone.rs"]
mod tests;
