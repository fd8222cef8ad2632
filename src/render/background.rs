use std::path::Path;

use image::RgbImage;

use crate::assets::decode::load_rgba;
use crate::design::model::{BackgroundSpec, FitMode};
use crate::foundation::core::Rgb8;
use crate::render::composite::{over_in_place, paste_opaque, scale_alpha_in_place};
use crate::render::fit::{fit_to_zone, fit_with_mode};
use crate::render::gradient::fill_gradient;
use crate::render::report::{Degradation, RenderReport};

/// Outcome of a stage that may degrade instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageStatus {
    /// The stage drew what was asked.
    Applied,
    /// The stage was skipped; a degradation was recorded.
    Skipped,
}

/// Outcome of placing the user photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhotoStatus {
    /// The photo now covers the surface.
    Applied,
    /// The path does not exist; the background step should run instead.
    Missing,
    /// The file exists but could not be decoded; the surface keeps its base fill.
    Failed,
}

/// Flat fill of the whole surface.
pub fn fill_solid(surface: &mut RgbImage, color: Rgb8) {
    let px = color.to_pixel();
    for p in surface.pixels_mut() {
        *p = px;
    }
}

/// Draw `spec` over the whole surface.
pub fn draw_background(
    surface: &mut RgbImage,
    spec: &BackgroundSpec,
    report: &mut RenderReport,
) -> StageStatus {
    match spec {
        BackgroundSpec::Solid { color } => {
            fill_solid(surface, *color);
            StageStatus::Applied
        }
        BackgroundSpec::Gradient {
            direction, colors, ..
        } => {
            fill_gradient(surface, *direction, colors);
            StageStatus::Applied
        }
        BackgroundSpec::Image {
            path,
            opacity,
            fit_mode,
        } => draw_image_background(surface, path, *opacity, *fit_mode, report),
    }
}

/// Blend the image at `path` over the surface at `opacity`.
///
/// A load failure records [`Degradation::BackgroundSkipped`] and leaves the surface untouched.
pub fn draw_image_background(
    surface: &mut RgbImage,
    path: &Path,
    opacity: f32,
    fit_mode: FitMode,
    report: &mut RenderReport,
) -> StageStatus {
    let mut img = match load_rgba(path) {
        Ok(img) => img,
        Err(e) => {
            report.record(Degradation::BackgroundSkipped {
                path: path.to_path_buf(),
                reason: format!("{e:#}"),
            });
            return StageStatus::Skipped;
        }
    };
    if opacity < 1.0 {
        scale_alpha_in_place(&mut img, opacity);
    }
    let (w, h) = surface.dimensions();
    let fitted = fit_with_mode(&img, w, h, fit_mode);
    over_in_place(surface, &fitted, 0, 0);
    tracing::debug!(path = %path.display(), opacity, ?fit_mode, "image background drawn");
    StageStatus::Applied
}

/// Cover the whole surface with the user photo.
///
/// The photo replaces the background step; its alpha channel is ignored.
pub fn apply_user_photo(surface: &mut RgbImage, path: &Path, report: &mut RenderReport) -> PhotoStatus {
    if !path.exists() {
        report.record(Degradation::UserPhotoSkipped {
            path: path.to_path_buf(),
            reason: "file does not exist".to_owned(),
        });
        return PhotoStatus::Missing;
    }
    match load_rgba(path) {
        Ok(photo) => {
            let (w, h) = surface.dimensions();
            let fitted = fit_to_zone(&photo, w, h);
            paste_opaque(surface, &fitted, 0, 0);
            PhotoStatus::Applied
        }
        Err(e) => {
            report.record(Degradation::UserPhotoSkipped {
                path: path.to_path_buf(),
                reason: format!("{e:#}"),
            });
            PhotoStatus::Failed
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
