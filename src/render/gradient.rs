use rayon::prelude::*;

use crate::design::model::GradientDirection;
use crate::foundation::core::Rgb8;

/// Sample a multi-stop gradient at `ratio`.
///
/// `ratio` is clamped to `[0, 1]` and mapped onto `len - 1` equal segments; channels are
/// interpolated linearly inside a segment and truncated. A single stop is returned as-is and an
/// empty list yields black.
pub fn interpolate(colors: &[Rgb8], ratio: f64) -> Rgb8 {
    let ratio = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };

    match colors {
        [] => Rgb8::new(0, 0, 0),
        [only] => *only,
        _ => {
            let last = colors.len() - 1;
            let segment = ratio * last as f64;
            let idx = (segment.floor() as usize).min(last);
            let local = segment - idx as f64;

            let a = colors[idx];
            let b = colors[(idx + 1).min(last)];
            let lerp = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * local) as u8;
            Rgb8::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
        }
    }
}

/// Gradient parameter of pixel `(x, y)` on a `width`×`height` surface.
pub fn gradient_ratio(direction: GradientDirection, x: u32, y: u32, width: u32, height: u32) -> f64 {
    match direction {
        GradientDirection::Horizontal => f64::from(x) / f64::from(width.max(1)),
        GradientDirection::Vertical => f64::from(y) / f64::from(height.max(1)),
        GradientDirection::Diagonal => {
            f64::from(x + y) / f64::from((width + height).max(1))
        }
        GradientDirection::Radial => {
            let cx = f64::from(width / 2);
            let cy = f64::from(height / 2);
            let max_radius = cx.hypot(cy);
            if max_radius == 0.0 {
                return 0.0;
            }
            let distance = (f64::from(x) - cx).hypot(f64::from(y) - cy);
            (distance / max_radius).min(1.0)
        }
    }
}

/// Fill the whole surface with a gradient.
///
/// Rows are filled in parallel; horizontal and vertical gradients sample one color per column or
/// row, the other geometries sample per pixel.
pub fn fill_gradient(surface: &mut image::RgbImage, direction: GradientDirection, colors: &[Rgb8]) {
    let (w, h) = surface.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let buf: &mut [u8] = surface;

    match direction {
        GradientDirection::Horizontal => {
            let columns: Vec<[u8; 3]> = (0..w)
                .map(|x| interpolate(colors, gradient_ratio(direction, x, 0, w, h)).to_array())
                .collect();
            fill_rows(buf, w, |x, _| columns[x as usize]);
        }
        GradientDirection::Vertical => {
            let rows: Vec<[u8; 3]> = (0..h)
                .map(|y| interpolate(colors, gradient_ratio(direction, 0, y, w, h)).to_array())
                .collect();
            fill_rows(buf, w, |_, y| rows[y as usize]);
        }
        GradientDirection::Diagonal | GradientDirection::Radial => {
            fill_rows(buf, w, |x, y| {
                interpolate(colors, gradient_ratio(direction, x, y, w, h)).to_array()
            });
        }
    }
}

/// Allocate a new `width`×`height` gradient image.
pub fn gradient(
    direction: GradientDirection,
    colors: &[Rgb8],
    width: u32,
    height: u32,
) -> image::RgbImage {
    let mut img = image::RgbImage::new(width, height);
    fill_gradient(&mut img, direction, colors);
    img
}

fn fill_rows<F>(buf: &mut [u8], width: u32, color_at: F)
where
    F: Fn(u32, u32) -> [u8; 3] + Sync,
{
    let row_len = width as usize * 3;
    buf.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(3).enumerate() {
                px.copy_from_slice(&color_at(x as u32, y as u32));
            }
        });
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
