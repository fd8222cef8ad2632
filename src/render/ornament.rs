//! Complexity-gated decorative ornaments.
//!
//! Ornaments are planned as `kurbo` shapes in pixel-edge coordinates (pixel `(x, y)` covers
//! `[x, x+1) × [y, y+1)`) and painted by testing each pixel centre for containment.

use image::RgbImage;
use kurbo::{Circle, Point, Rect, Shape};

use crate::design::model::{Complexity, Palette};
use crate::foundation::core::Rgb8;

/// Inset of the border from the surface edge.
pub const BORDER_MARGIN: f64 = 10.0;
/// Length of each corner-accent arm.
pub const CORNER_ARM: f64 = 15.0;
/// Stroke width of corner accents.
pub const CORNER_STROKE: f64 = 2.0;
/// Dot radius.
pub const DOT_RADIUS: f64 = 4.0;
/// Distance of dot centres from the surface edges.
pub const DOT_MARGIN: f64 = 20.0;
/// Distance of the divider from the bottom edge.
pub const DIVIDER_OFFSET: f64 = 50.0;
/// Horizontal inset of the divider.
pub const DIVIDER_INSET: f64 = 40.0;

/// Ornament category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrnamentKind {
    /// Inset rectangular border (tier 2+).
    Border,
    /// L-shaped corner accent arm (tier 3+).
    Corner,
    /// Filled dot marker (tier 4+).
    Dot,
    /// Horizontal divider near the bottom (tier 5).
    Divider,
}

/// Geometry of one ornament.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrnamentShape {
    /// Filled rectangle.
    Rect(Rect),
    /// Ring between an outer and inner rectangle.
    Frame {
        /// Outer edge.
        outer: Rect,
        /// Inner edge.
        inner: Rect,
    },
    /// Filled circle.
    Circle(Circle),
}

impl OrnamentShape {
    fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Rect(r) => r.contains(pt),
            Self::Frame { outer, inner } => outer.contains(pt) && !inner.contains(pt),
            Self::Circle(c) => c.contains(pt),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Frame { outer, .. } => *outer,
            Self::Circle(c) => c.bounding_box(),
        }
    }
}

/// One planned ornament.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ornament {
    /// Category.
    pub kind: OrnamentKind,
    /// Geometry.
    pub shape: OrnamentShape,
    /// Fill color.
    pub color: Rgb8,
}

/// Plan the ornaments for a `width`×`height` surface. Tier 1 plans nothing.
pub fn plan_ornaments(width: u32, height: u32, complexity: Complexity, palette: &Palette) -> Vec<Ornament> {
    let tier = complexity.tier();
    let (w, h) = (f64::from(width), f64::from(height));
    let accent = palette.accent();
    let mut out = Vec::new();

    if tier >= 2 {
        let stroke = if tier >= 4 { 3.0 } else { 2.0 };
        let outer = Rect::new(BORDER_MARGIN, BORDER_MARGIN, w - BORDER_MARGIN, h - BORDER_MARGIN);
        let inner = Rect::new(
            outer.x0 + stroke,
            outer.y0 + stroke,
            outer.x1 - stroke,
            outer.y1 - stroke,
        );
        out.push(Ornament {
            kind: OrnamentKind::Border,
            shape: OrnamentShape::Frame { outer, inner },
            color: accent,
        });
    }

    if tier >= 3 {
        let arm = CORNER_ARM + 1.0;
        let s = CORNER_STROKE;
        let arms = [
            Rect::new(0.0, 0.0, arm, s),
            Rect::new(0.0, 0.0, s, arm),
            Rect::new(w - arm, 0.0, w, s),
            Rect::new(w - s, 0.0, w, arm),
            Rect::new(0.0, h - s, arm, h),
            Rect::new(0.0, h - arm, s, h),
            Rect::new(w - arm, h - s, w, h),
            Rect::new(w - s, h - arm, w, h),
        ];
        out.extend(arms.into_iter().map(|r| Ornament {
            kind: OrnamentKind::Corner,
            shape: OrnamentShape::Rect(r),
            color: accent,
        }));
    }

    if tier >= 4 {
        let dot_color = palette.get_or(2, 1);
        let centres = [
            (DOT_MARGIN, DOT_MARGIN),
            (w - DOT_MARGIN, DOT_MARGIN),
            (DOT_MARGIN, h - DOT_MARGIN),
            (w - DOT_MARGIN, h - DOT_MARGIN),
        ];
        out.extend(centres.into_iter().map(|(x, y)| Ornament {
            kind: OrnamentKind::Dot,
            shape: OrnamentShape::Circle(Circle::new((x + 0.5, y + 0.5), DOT_RADIUS + 0.5)),
            color: dot_color,
        }));
    }

    if tier >= 5 {
        let y = h - DIVIDER_OFFSET;
        out.push(Ornament {
            kind: OrnamentKind::Divider,
            shape: OrnamentShape::Rect(Rect::new(DIVIDER_INSET, y, w - DIVIDER_INSET + 1.0, y + 1.0)),
            color: accent,
        });
    }

    out
}

/// Paint planned ornaments in order.
pub fn paint_ornaments(surface: &mut RgbImage, ornaments: &[Ornament]) {
    let (sw, sh) = surface.dimensions();
    for o in ornaments {
        let b = o.shape.bounds();
        let x0 = b.x0.floor().max(0.0) as u32;
        let y0 = b.y0.floor().max(0.0) as u32;
        let x1 = (b.x1.ceil().max(0.0) as u32).min(sw);
        let y1 = (b.y1.ceil().max(0.0) as u32).min(sh);
        let px = o.color.to_pixel();
        for y in y0..y1 {
            for x in x0..x1 {
                let centre = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if o.shape.contains(centre) {
                    surface.put_pixel(x, y, px);
                }
            }
        }
    }
}

/// Plan and paint in one step.
pub fn draw_ornaments(surface: &mut RgbImage, complexity: Complexity, palette: &Palette) {
    let (w, h) = surface.dimensions();
    let plan = plan_ornaments(w, h, complexity, palette);
    tracing::debug!(tier = complexity.tier(), count = plan.len(), "ornaments planned");
    paint_ornaments(surface, &plan);
}

#[cfg(test)]
#[path = "../../tests/unit/render/ornament.rs"]
mod tests;
