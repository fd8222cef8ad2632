use super::*;

fn sketched(layout: LayoutArchetype, hex: &[&str]) -> RgbImage {
    let palette = Palette::from_hex(hex).unwrap();
    let mut surface = RgbImage::from_pixel(170, 510, palette.base().to_pixel());
    draw_layout_sketch(&mut surface, layout, &palette);
    surface
}

#[test]
fn left_right_sketches_a_lightened_photo_slot() {
    // #64C8FA lightened by 20% = (120, 240, 255).
    let s = sketched(LayoutArchetype::LeftRight, &["#64C8FA", "#000000"]);
    assert_eq!(s.get_pixel(10, 10).0, [0, 0, 0]);
    assert_eq!(s.get_pixel(40, 200).0, [120, 240, 255]);
    // Slot spans x 10..=66 (int(170 * 0.45) - 10).
    assert_eq!(s.get_pixel(66, 200).0, [0, 0, 0]);
    assert_eq!(s.get_pixel(100, 200).0, [0x64, 0xC8, 0xFA]);
    assert_eq!(s.get_pixel(5, 5).0, [0x64, 0xC8, 0xFA]);
}

#[test]
fn single_color_palette_outlines_in_light_gray() {
    let s = sketched(LayoutArchetype::TopBottom, &["#64C8FA"]);
    assert_eq!(s.get_pixel(10, 10).0, [0xCC, 0xCC, 0xCC]);
    assert_eq!(s.get_pixel(80, 100).0, [120, 240, 255]);
}

#[test]
fn center_focused_uses_three_pixel_outline() {
    let s = sketched(LayoutArchetype::CenterFocused, &["#646464", "#FF0000"]);
    // margin int(25.5) = 25
    for x in 25..28 {
        assert_eq!(s.get_pixel(x, 200).0, [255, 0, 0]);
    }
    assert_eq!(s.get_pixel(28, 200).0, [110, 110, 110]);
    assert_eq!(s.get_pixel(24, 200).0, [100, 100, 100]);
}

#[test]
fn mosaic_cycles_palette_colors() {
    let s = sketched(LayoutArchetype::MosaicGrid, &["#646464", "#C80000"]);
    // cell 70x240; cell (0,1) starts at x = 80.
    assert_eq!(s.get_pixel(40, 100).0, [114, 114, 114]);
    assert_eq!(s.get_pixel(120, 100).0, [229, 0, 0]);
    assert_eq!(s.get_pixel(40, 400).0, [114, 114, 114]);
    assert_eq!(s.get_pixel(80, 100).0, [100, 100, 100]);
}

#[test]
fn full_bleed_darkens_downward() {
    let s = sketched(LayoutArchetype::FullBleedImage, &["#C8C8C8"]);
    assert_eq!(s.get_pixel(0, 0).0, [200, 200, 200]);
    let bottom = s.get_pixel(0, 509).0[0];
    assert!(bottom < 141 && bottom >= 139, "{bottom}");
    assert!(s.get_pixel(5, 300).0[0] < s.get_pixel(5, 100).0[0]);
}

#[test]
fn tiny_surfaces_are_clipped() {
    let palette = Palette::from_hex(&["#123456", "#654321"]).unwrap();
    for layout in [
        LayoutArchetype::LeftRight,
        LayoutArchetype::TopBottom,
        LayoutArchetype::CenterFocused,
        LayoutArchetype::MosaicGrid,
        LayoutArchetype::FullBleedImage,
    ] {
        let mut surface = RgbImage::new(8, 8);
        draw_layout_sketch(&mut surface, layout, &palette);
    }
}
