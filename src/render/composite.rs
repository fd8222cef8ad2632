use image::{RgbImage, RgbaImage};

use crate::foundation::core::{PixelRect, Rgb8};
use crate::foundation::math::mul_div255_u16;

/// Blend a straight-alpha source pixel over an opaque destination pixel.
pub fn over(dst: [u8; 3], src: [u8; 4]) -> [u8; 3] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return [src[0], src[1], src[2]];
    }
    let inv = 255 - sa;
    let mut out = [0u8; 3];
    for i in 0..3 {
        let v = mul_div255_u16(u16::from(src[i]), sa) + mul_div255_u16(u16::from(dst[i]), inv);
        out[i] = v.min(255) as u8;
    }
    out
}

/// Alpha-composite `src` onto `dst` with its top-left corner at (`x`, `y`), clipped to `dst`.
pub fn over_in_place(dst: &mut RgbImage, src: &RgbaImage, x: i64, y: i64) {
    for_each_overlap(dst, src.dimensions(), x, y, |dst, sx, sy, dx, dy| {
        let d = dst.get_pixel_mut(dx, dy);
        d.0 = over(d.0, src.get_pixel(sx, sy).0);
    });
}

/// Copy `src` into `dst` at (`x`, `y`), clipped to `dst`.
pub fn paste(dst: &mut RgbImage, src: &RgbImage, x: i64, y: i64) {
    for_each_overlap(dst, src.dimensions(), x, y, |dst, sx, sy, dx, dy| {
        dst.put_pixel(dx, dy, *src.get_pixel(sx, sy));
    });
}

/// Copy an opaque RGBA image (alpha is ignored) into `dst` at (`x`, `y`).
pub fn paste_opaque(dst: &mut RgbImage, src: &RgbaImage, x: i64, y: i64) {
    for_each_overlap(dst, src.dimensions(), x, y, |dst, sx, sy, dx, dy| {
        let [r, g, b, _] = src.get_pixel(sx, sy).0;
        dst.put_pixel(dx, dy, image::Rgb([r, g, b]));
    });
}

/// Blend one pixel of `color` with `coverage` (0..=255) at (`x`, `y`); out-of-bounds is a no-op.
pub fn blend_pixel(dst: &mut RgbImage, x: i64, y: i64, color: Rgb8, coverage: u8) {
    if coverage == 0 || x < 0 || y < 0 {
        return;
    }
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if x >= dst.width() || y >= dst.height() {
        return;
    }
    let d = dst.get_pixel_mut(x, y);
    d.0 = over(d.0, [color.r, color.g, color.b, coverage]);
}

/// Flat fill of `rect`, clipped to the surface.
pub fn fill_rect(dst: &mut RgbImage, rect: PixelRect, color: Rgb8) {
    let x1 = rect.right().min(dst.width());
    let y1 = rect.bottom().min(dst.height());
    let px = color.to_pixel();
    for y in rect.y..y1 {
        for x in rect.x..x1 {
            dst.put_pixel(x, y, px);
        }
    }
}

/// Outline the inclusive box `(x0, y0)..=(x1, y1)` with `width` pixels drawn inward.
pub fn stroke_box(dst: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, width: u32, color: Rgb8) {
    if x1 < x0 || y1 < y0 || width == 0 {
        return;
    }
    let w = x1 - x0 + 1;
    let h = y1 - y0 + 1;
    let t = width.min(w).min(h);
    fill_rect(dst, PixelRect::new(x0, y0, w, t), color);
    fill_rect(dst, PixelRect::new(x0, y1 + 1 - t, w, t), color);
    fill_rect(dst, PixelRect::new(x0, y0, t, h), color);
    fill_rect(dst, PixelRect::new(x1 + 1 - t, y0, t, h), color);
}

/// Scale the alpha channel of every pixel by `opacity`, truncating.
pub fn scale_alpha_in_place(img: &mut RgbaImage, opacity: f32) {
    for p in img.pixels_mut() {
        p.0[3] = crate::foundation::math::scale_alpha(p.0[3], opacity);
    }
}

fn for_each_overlap(
    dst: &mut RgbImage,
    (sw, sh): (u32, u32),
    x: i64,
    y: i64,
    mut f: impl FnMut(&mut RgbImage, u32, u32, u32, u32),
) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(sw)).min(dw);
    let y1 = (y + i64::from(sh)).min(dh);
    for dy in y0..y1 {
        for dx in x0..x1 {
            f(dst, (dx - x) as u32, (dy - y) as u32, dx as u32, dy as u32);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
