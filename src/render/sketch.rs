//! Placeholder geometry painted by the preview path for each layout archetype.

use image::RgbImage;

use crate::assets::color::{darken, lighten};
use crate::design::model::{LayoutArchetype, Palette};
use crate::foundation::core::{PixelRect, Rgb8};
use crate::render::composite::{fill_rect, stroke_box};

/// Paint the archetype's placeholder sketch over the surface.
pub fn draw_layout_sketch(surface: &mut RgbImage, layout: LayoutArchetype, palette: &Palette) {
    let (w, h) = (i64::from(surface.width()), i64::from(surface.height()));
    let base = palette.base();
    let outline = if palette.len() > 1 {
        palette.colors()[1]
    } else {
        Rgb8::LIGHT_GRAY
    };

    match layout {
        LayoutArchetype::LeftRight => {
            let split = (w as f64 * 0.45) as i64;
            boxed(surface, (10, 10, split - 10, h - 10), lighten(base, 20), Some((outline, 2)));
            boxed(surface, (split, 10, w - 10, h - 10), base, None);
        }
        LayoutArchetype::TopBottom => {
            let split = (h as f64 * 0.55) as i64;
            boxed(surface, (10, 10, w - 10, split - 10), lighten(base, 20), Some((outline, 2)));
            boxed(surface, (10, split, w - 10, h - 10), base, None);
        }
        LayoutArchetype::CenterFocused => {
            let m = (w as f64 * 0.15) as i64;
            boxed(surface, (m, m, w - m, h - m), lighten(base, 10), Some((outline, 3)));
        }
        LayoutArchetype::MosaicGrid => {
            let cell_w = (w - 30).div_euclid(2);
            let cell_h = (h - 30).div_euclid(2);
            for i in 0..2 {
                for j in 0..2 {
                    let x0 = 10 + j * cell_w;
                    let y0 = 10 + i * cell_h;
                    let fill = lighten(palette.cyclic((i * 2 + j) as usize), 15);
                    boxed(
                        surface,
                        (x0, y0, x0 + cell_w - 5, y0 + cell_h - 5),
                        fill,
                        Some((base, 2)),
                    );
                }
            }
        }
        LayoutArchetype::FullBleedImage => {
            let height = surface.height();
            for y in 0..height {
                let ratio = f64::from(y) / f64::from(height);
                let row = darken(base, 1.0 - ratio * 0.3);
                fill_rect(surface, PixelRect::new(0, y, surface.width(), 1), row);
            }
        }
    }
}

/// Fill the inclusive box and optionally outline it inward. Off-surface parts are clipped.
fn boxed(
    surface: &mut RgbImage,
    (x0, y0, x1, y1): (i64, i64, i64, i64),
    fill: Rgb8,
    outline: Option<(Rgb8, u32)>,
) {
    let max_x = i64::from(surface.width()) - 1;
    let max_y = i64::from(surface.height()) - 1;
    let (x0, y0) = (x0.max(0), y0.max(0));
    let (x1, y1) = (x1.min(max_x), y1.min(max_y));
    if x1 < x0 || y1 < y0 {
        return;
    }
    let (x0, y0, x1, y1) = (x0 as u32, y0 as u32, x1 as u32, y1 as u32);
    fill_rect(surface, PixelRect::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1), fill);
    if let Some((color, width)) = outline {
        stroke_box(surface, x0, y0, x1, y1, width, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sketch.rs"]
mod tests;
