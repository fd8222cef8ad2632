use std::collections::HashSet;

use super::*;

fn paths(list: &[&str]) -> Vec<PathBuf> {
    list.iter().map(PathBuf::from).collect()
}

#[test]
fn select_font_path_keeps_list_order() {
    let list = paths(&["/a/cjk.ttc", "/b/other.ttc", "/c/latin.ttf"]);
    let present: HashSet<&str> = ["/c/latin.ttf", "/b/other.ttc"].into_iter().collect();
    let picked = select_font_path(&list, |p| present.contains(p.to_str().unwrap_or("")));
    assert_eq!(picked, Some(Path::new("/b/other.ttc")));
}

#[test]
fn select_font_path_none_when_nothing_exists() {
    let list = paths(&["/a", "/b"]);
    assert_eq!(select_font_path(&list, |_| false), None);
    assert_eq!(select_font_path(&[], |_| true), None);
}

#[test]
fn empty_path_list_falls_back_to_builtin() {
    let resolver = FontResolver::new(Vec::new());
    assert!(!resolver.used_fallback(), "no lookup has happened yet");
    let face = resolver.resolve(24);
    assert!(face.is_builtin());
    assert!(resolver.used_fallback());
    assert_eq!(resolver.loaded_path(), None);
}

#[test]
fn unparseable_font_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("broken.ttf");
    std::fs::write(&bogus, b"not a font").unwrap();
    let resolver = FontResolver::new(vec![bogus]);
    assert!(resolver.resolve(16).is_builtin());
    assert!(resolver.used_fallback());
}

#[test]
fn injected_predicate_rejecting_everything_uses_builtin() {
    let resolver = FontResolver::with_predicate(paths(&["/does/not/matter.ttf"]), |_| false);
    assert!(resolver.resolve(12).is_builtin());
}

#[test]
fn builtin_advances_scale_with_pixel_size() {
    let resolver = FontResolver::new(Vec::new());
    assert_eq!(resolver.resolve(8).advance('A'), 6);
    assert_eq!(resolver.resolve(24).advance('A'), 18);
    assert_eq!(resolver.resolve(3).advance('A'), 6);
    assert_eq!(resolver.resolve(24).measure("书ab"), 54);
}

#[test]
fn builtin_rasterizes_placeholder_box_for_cjk() {
    let resolver = FontResolver::new(Vec::new());
    let glyph = resolver.resolve(16).rasterize('书');
    assert_eq!((glyph.width, glyph.height), (10, 14));
    assert_eq!(glyph.coverage[0], 255);
    assert_eq!(glyph.coverage[(7 * 10 + 5) as usize], 0);
}

#[test]
fn draw_paints_ink_in_color() {
    let resolver = FontResolver::new(Vec::new());
    let face = resolver.resolve(8);
    let mut surface = RgbImage::new(10, 10);
    let red = Rgb8::new(255, 0, 0);
    face.draw(&mut surface, '|', 1, 1, red, GlyphStyle::default());
    // '|' is a full-height stroke in the middle column.
    assert_eq!(surface.get_pixel(3, 1).0, [255, 0, 0]);
    assert_eq!(surface.get_pixel(3, 7).0, [255, 0, 0]);
    assert_eq!(surface.get_pixel(2, 4).0, [0, 0, 0]);
}

#[test]
fn bold_widens_strokes_without_changing_advance() {
    let resolver = FontResolver::new(Vec::new());
    let face = resolver.resolve(8);
    let mut surface = RgbImage::new(10, 10);
    let style = GlyphStyle {
        weight: FontWeight::Bold,
        slant: FontSlant::Normal,
    };
    face.draw(&mut surface, '|', 0, 0, Rgb8::new(255, 255, 255), style);
    assert_eq!(surface.get_pixel(2, 3).0, [255; 3]);
    assert_eq!(surface.get_pixel(3, 3).0, [255; 3]);
    assert_eq!(face.advance('|'), 6);
}

#[test]
fn italic_shears_top_rows_right() {
    let resolver = FontResolver::new(Vec::new());
    let face = resolver.resolve(8);
    let mut surface = RgbImage::new(12, 10);
    let style = GlyphStyle {
        weight: FontWeight::Normal,
        slant: FontSlant::Italic,
    };
    face.draw(&mut surface, '|', 0, 0, Rgb8::new(255, 255, 255), style);
    // Bottom row unsheared, top row shifted by round(6 * 0.2) = 1.
    assert_eq!(surface.get_pixel(2, 6).0, [255; 3]);
    assert_eq!(surface.get_pixel(3, 0).0, [255; 3]);
    assert_eq!(surface.get_pixel(2, 0).0, [0; 3]);
}

#[test]
fn system_fallback_font_loads_when_installed() {
    let dejavu = PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf");
    if !dejavu.exists() {
        return;
    }
    let resolver = FontResolver::new(vec![dejavu.clone()]);
    let face = resolver.resolve(20);
    assert!(!face.is_builtin());
    assert_eq!(resolver.loaded_path(), Some(dejavu.as_path()));
    assert!(face.advance('W') > 0);
}
