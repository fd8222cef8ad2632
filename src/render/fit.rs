use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::design::model::FitMode;

/// Aspect ratios closer than this are scaled directly instead of cropped.
pub const RATIO_TOLERANCE: f64 = 0.1;

const FILTER: FilterType = FilterType::Lanczos3;

/// Smart-crop `img` to the target aspect ratio around its center, then scale to exactly
/// `target_w`×`target_h`.
pub fn fit_to_zone(img: &RgbaImage, target_w: u32, target_h: u32) -> RgbaImage {
    if let Some(empty) = degenerate(img, target_w, target_h) {
        return empty;
    }
    let (w, h) = img.dimensions();
    let target_ratio = f64::from(target_w) / f64::from(target_h);
    let img_ratio = f64::from(w) / f64::from(h);

    if (target_ratio - img_ratio).abs() < RATIO_TOLERANCE {
        return imageops::resize(img, target_w, target_h, FILTER);
    }

    let cropped = if img_ratio > target_ratio {
        let new_w = ((f64::from(h) * target_ratio) as u32).clamp(1, w);
        let left = (w - new_w) / 2;
        imageops::crop_imm(img, left, 0, new_w, h).to_image()
    } else {
        let new_h = ((f64::from(w) / target_ratio) as u32).clamp(1, h);
        let top = (h - new_h) / 2;
        imageops::crop_imm(img, 0, top, w, new_h).to_image()
    };
    imageops::resize(&cropped, target_w, target_h, FILTER)
}

/// Fit `img` to `target_w`×`target_h` using an explicit [`FitMode`].
///
/// `Contain` scales so the constraining axis fits exactly and center-crops the other axis; it
/// never letterboxes.
pub fn fit_with_mode(img: &RgbaImage, target_w: u32, target_h: u32, mode: FitMode) -> RgbaImage {
    if let Some(empty) = degenerate(img, target_w, target_h) {
        return empty;
    }
    match mode {
        FitMode::Cover => fit_to_zone(img, target_w, target_h),
        FitMode::Stretch => imageops::resize(img, target_w, target_h, FILTER),
        FitMode::Contain => {
            let (w, h) = img.dimensions();
            let img_ratio = f64::from(w) / f64::from(h);
            let target_ratio = f64::from(target_w) / f64::from(target_h);

            if img_ratio > target_ratio {
                let new_w = ((f64::from(target_h) * img_ratio) as u32).max(target_w);
                let resized = imageops::resize(img, new_w, target_h, FILTER);
                let x = (new_w - target_w) / 2;
                imageops::crop_imm(&resized, x, 0, target_w, target_h).to_image()
            } else {
                let new_h = ((f64::from(target_w) / img_ratio) as u32).max(target_h);
                let resized = imageops::resize(img, target_w, new_h, FILTER);
                let y = (new_h - target_h) / 2;
                imageops::crop_imm(&resized, 0, y, target_w, target_h).to_image()
            }
        }
    }
}

fn degenerate(img: &RgbaImage, target_w: u32, target_h: u32) -> Option<RgbaImage> {
    let (w, h) = img.dimensions();
    if target_w == 0 || target_h == 0 || w == 0 || h == 0 {
        return Some(RgbaImage::new(target_w, target_h));
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
