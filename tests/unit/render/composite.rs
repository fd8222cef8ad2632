use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    assert_eq!(over([10, 20, 30], [200, 200, 200, 0]), [10, 20, 30]);
}

#[test]
fn over_src_opaque_replaces_dst() {
    assert_eq!(over([10, 20, 30], [1, 2, 3, 255]), [1, 2, 3]);
}

#[test]
fn over_half_alpha_mixes() {
    assert_eq!(over([0, 0, 0], [255, 255, 255, 128]), [128, 128, 128]);
    assert_eq!(over([200, 0, 0], [0, 0, 0, 128]), [100, 0, 0]);
}

#[test]
fn over_in_place_clips_negative_offsets() {
    let mut dst = RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0]));
    let src = RgbaImage::from_pixel(3, 3, image::Rgba([255, 0, 0, 255]));
    over_in_place(&mut dst, &src, -2, 3);
    assert_eq!(dst.get_pixel(0, 3).0, [255, 0, 0]);
    assert_eq!(dst.get_pixel(1, 3).0, [0, 0, 0]);
    assert_eq!(dst.get_pixel(0, 2).0, [0, 0, 0]);
}

#[test]
fn paste_places_at_offset() {
    let mut dst = RgbImage::new(5, 5);
    let src = RgbImage::from_pixel(2, 2, image::Rgb([7, 8, 9]));
    paste(&mut dst, &src, 3, 3);
    assert_eq!(dst.get_pixel(3, 3).0, [7, 8, 9]);
    assert_eq!(dst.get_pixel(4, 4).0, [7, 8, 9]);
    assert_eq!(dst.get_pixel(2, 2).0, [0, 0, 0]);
}

#[test]
fn stroke_box_draws_inward_outline() {
    let mut dst = RgbImage::new(10, 10);
    let c = Rgb8::new(255, 255, 255);
    stroke_box(&mut dst, 1, 1, 8, 8, 2, c);
    assert_eq!(dst.get_pixel(1, 1).0, [255; 3]);
    assert_eq!(dst.get_pixel(2, 5).0, [255; 3]);
    assert_eq!(dst.get_pixel(8, 8).0, [255; 3]);
    assert_eq!(dst.get_pixel(7, 5).0, [255; 3]);
    assert_eq!(dst.get_pixel(3, 5).0, [0; 3]);
    assert_eq!(dst.get_pixel(0, 0).0, [0; 3]);
    assert_eq!(dst.get_pixel(9, 9).0, [0; 3]);
}

#[test]
fn fill_rect_clips_to_surface() {
    let mut dst = RgbImage::new(3, 3);
    fill_rect(&mut dst, PixelRect::new(2, 2, 10, 10), Rgb8::new(1, 1, 1));
    assert_eq!(dst.get_pixel(2, 2).0, [1, 1, 1]);
    assert_eq!(dst.get_pixel(1, 1).0, [0, 0, 0]);
}

#[test]
fn blend_pixel_ignores_out_of_bounds() {
    let mut dst = RgbImage::new(2, 2);
    blend_pixel(&mut dst, -1, 0, Rgb8::new(9, 9, 9), 255);
    blend_pixel(&mut dst, 2, 0, Rgb8::new(9, 9, 9), 255);
    blend_pixel(&mut dst, 1, 1, Rgb8::new(9, 9, 9), 255);
    assert_eq!(dst.get_pixel(1, 1).0, [9, 9, 9]);
    assert_eq!(dst.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn scale_alpha_in_place_truncates() {
    let mut img = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255]));
    scale_alpha_in_place(&mut img, 0.5);
    assert_eq!(img.get_pixel(0, 0).0[3], 127);
}
