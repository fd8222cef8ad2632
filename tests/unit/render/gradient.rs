use super::*;

fn stops() -> Vec<Rgb8> {
    vec![
        Rgb8::new(0xF5, 0xF5, 0xDC),
        Rgb8::new(0x4A, 0x7C, 0x59),
        Rgb8::new(0x10, 0x20, 0xF0),
    ]
}

fn channel_distance(a: Rgb8, b: Rgb8) -> u8 {
    [a.r.abs_diff(b.r), a.g.abs_diff(b.g), a.b.abs_diff(b.b)]
        .into_iter()
        .max()
        .unwrap()
}

#[test]
fn endpoints_are_exact() {
    for n in 2..=3 {
        let colors = &stops()[..n];
        assert_eq!(interpolate(colors, 0.0), colors[0]);
        assert_eq!(interpolate(colors, 1.0), colors[n - 1]);
    }
}

#[test]
fn single_color_ignores_ratio() {
    let c = Rgb8::new(1, 2, 3);
    for r in [-1.0, 0.0, 0.3, 1.0, 7.0] {
        assert_eq!(interpolate(&[c], r), c);
    }
}

#[test]
fn ratio_is_clamped() {
    let colors = stops();
    assert_eq!(interpolate(&colors, -0.5), colors[0]);
    assert_eq!(interpolate(&colors, 1.5), colors[2]);
    assert_eq!(interpolate(&colors, f64::NAN), colors[0]);
    assert_eq!(interpolate(&[], 0.5), Rgb8::new(0, 0, 0));
}

#[test]
fn midpoint_truncates_channels() {
    let colors = [Rgb8::new(0, 255, 10), Rgb8::new(255, 0, 11)];
    assert_eq!(interpolate(&colors, 0.5), Rgb8::new(127, 127, 10));
}

#[test]
fn interpolation_is_continuous() {
    let colors = stops();
    let eps = 1e-6;
    let mut r = 0.001;
    while r < 1.0 {
        let d = channel_distance(interpolate(&colors, r), interpolate(&colors, r + eps));
        assert!(d <= 1, "jump of {d} at ratio {r}");
        r += 0.0137;
    }
    // Segment boundary of a three-stop gradient.
    let d = channel_distance(interpolate(&colors, 0.5 - eps), interpolate(&colors, 0.5));
    assert!(d <= 1);
}

#[test]
fn fill_matches_per_pixel_formula() {
    let colors = stops();
    let (w, h) = (13, 7);
    for direction in [
        GradientDirection::Horizontal,
        GradientDirection::Vertical,
        GradientDirection::Diagonal,
        GradientDirection::Radial,
    ] {
        let img = gradient(direction, &colors, w, h);
        for y in 0..h {
            for x in 0..w {
                let expected = interpolate(&colors, gradient_ratio(direction, x, y, w, h));
                assert_eq!(
                    img.get_pixel(x, y).0,
                    expected.to_array(),
                    "{direction:?} at ({x},{y})"
                );
            }
        }
    }
}

#[test]
fn radial_center_is_first_stop_and_corners_reach_last() {
    let colors = [Rgb8::new(255, 255, 255), Rgb8::new(0, 0, 0)];
    let img = gradient(GradientDirection::Radial, &colors, 20, 10);
    assert_eq!(img.get_pixel(10, 5).0, [255, 255, 255]);
    assert_eq!(gradient_ratio(GradientDirection::Radial, 0, 0, 20, 10), 1.0);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn horizontal_ratio_never_reaches_one() {
    assert_eq!(gradient_ratio(GradientDirection::Horizontal, 9, 0, 10, 1), 0.9);
    assert_eq!(gradient_ratio(GradientDirection::Diagonal, 3, 2, 5, 5), 0.5);
}

#[test]
fn empty_surface_is_a_noop() {
    let img = gradient(GradientDirection::Radial, &stops(), 0, 4);
    assert_eq!(img.dimensions(), (0, 4));
}
