use std::path::PathBuf;

use super::*;
use crate::design::model::GradientDirection;

fn write_png(dir: &Path, name: &str, img: &image::RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

fn base(w: u32, h: u32) -> RgbImage {
    RgbImage::from_pixel(w, h, image::Rgb([0, 0, 0]))
}

#[test]
fn solid_fills_everything() {
    let mut surface = base(4, 3);
    let mut report = RenderReport::default();
    let spec = BackgroundSpec::Solid {
        color: Rgb8::new(1, 2, 3),
    };
    assert_eq!(
        draw_background(&mut surface, &spec, &mut report),
        StageStatus::Applied
    );
    assert!(surface.pixels().all(|p| p.0 == [1, 2, 3]));
    assert!(report.is_clean());
}

#[test]
fn gradient_delegates_to_gradient_fill() {
    let mut surface = base(4, 10);
    let spec = BackgroundSpec::Gradient {
        direction: GradientDirection::Vertical,
        colors: vec![Rgb8::new(255, 0, 0), Rgb8::new(0, 0, 255)],
        angle: 90.0,
    };
    draw_background(&mut surface, &spec, &mut RenderReport::default());
    assert_eq!(surface.get_pixel(0, 0).0, [255, 0, 0]);
    assert_ne!(surface.get_pixel(0, 9).0, [255, 0, 0]);
}

#[test]
fn image_background_blends_at_opacity() {
    let dir = tempfile::tempdir().unwrap();
    let white = image::RgbaImage::from_pixel(8, 6, image::Rgba([255, 255, 255, 255]));
    let path = write_png(dir.path(), "bg.png", &white);

    let mut surface = base(4, 3);
    let mut report = RenderReport::default();
    let status = draw_image_background(&mut surface, &path, 0.5, FitMode::Cover, &mut report);
    assert_eq!(status, StageStatus::Applied);
    assert!(surface.pixels().all(|p| p.0 == [127, 127, 127]));

    let mut surface = base(4, 3);
    draw_image_background(&mut surface, &path, 1.0, FitMode::Stretch, &mut report);
    assert!(surface.pixels().all(|p| p.0 == [255, 255, 255]));
    assert!(report.is_clean());
}

#[test]
fn missing_background_image_is_skipped_and_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.png");
    let mut surface = base(4, 3);
    let mut report = RenderReport::default();
    let spec = BackgroundSpec::Image {
        path: missing.clone(),
        opacity: 1.0,
        fit_mode: FitMode::Cover,
    };
    assert_eq!(
        draw_background(&mut surface, &spec, &mut report),
        StageStatus::Skipped
    );
    assert!(surface.pixels().all(|p| p.0 == [0, 0, 0]));
    assert!(matches!(
        &report.degradations[..],
        [Degradation::BackgroundSkipped { path, .. }] if *path == missing
    ));
}

#[test]
fn user_photo_covers_surface() {
    let dir = tempfile::tempdir().unwrap();
    let photo = image::RgbaImage::from_pixel(30, 90, image::Rgba([10, 200, 30, 255]));
    let path = write_png(dir.path(), "photo.png", &photo);
    let mut surface = base(17, 51);
    let mut report = RenderReport::default();
    assert_eq!(
        apply_user_photo(&mut surface, &path, &mut report),
        PhotoStatus::Applied
    );
    assert!(surface.pixels().all(|p| p.0 == [10, 200, 30]));
    assert!(report.is_clean());
}

#[test]
fn user_photo_missing_or_corrupt_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let mut report = RenderReport::default();
    let mut surface = base(2, 2);

    let missing = dir.path().join("gone.jpg");
    assert_eq!(
        apply_user_photo(&mut surface, &missing, &mut report),
        PhotoStatus::Missing
    );

    let corrupt = dir.path().join("corrupt.png");
    std::fs::write(&corrupt, b"definitely not a png").unwrap();
    assert_eq!(
        apply_user_photo(&mut surface, &corrupt, &mut report),
        PhotoStatus::Failed
    );

    assert_eq!(report.degradations.len(), 2);
    assert!(
        report
            .degradations
            .iter()
            .all(|d| matches!(d, Degradation::UserPhotoSkipped { .. }))
    );
    assert!(surface.pixels().all(|p| p.0 == [0, 0, 0]));
}
