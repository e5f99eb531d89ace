use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use palette::Srgb;
use tracing::debug;

use crate::color::Sample;

const MAX_DIM: u32 = 256;

/// Load an image, resize to fit within 256x256 (preserving aspect ratio),
/// and normalize every pixel to a [0, 1] RGB sample.
pub fn load_image(path: &Path) -> Result<Vec<Sample>> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );

    let img = if img.width() > MAX_DIM || img.height() > MAX_DIM {
        img.resize(MAX_DIM, MAX_DIM, FilterType::Lanczos3)
    } else {
        img
    };
    let rgb_img = img.to_rgb8();

    let pixels: Vec<Sample> = rgb_img
        .pixels()
        .map(|p| Srgb::new(p[0], p[1], p[2]).into_format())
        .collect();

    Ok(pixels)
}
