use palette::Srgb;

use crate::color::{PaletteColor, Sample};
use crate::error::{PaletteError, Result};

/// Channel-wise mean of a bucket, converted to HSV.
pub fn average(bucket: &[Sample]) -> Result<PaletteColor> {
    if bucket.is_empty() {
        return Err(PaletteError::EmptyBucket);
    }

    let (r, g, b) = bucket.iter().fold((0.0f64, 0.0f64, 0.0f64), |(r, g, b), s| {
        (
            r + f64::from(s.red),
            g + f64::from(s.green),
            b + f64::from(s.blue),
        )
    });
    let n = bucket.len() as f64;
    let mean: Sample = Srgb::new((r / n) as f32, (g / n) as f32, (b / n) as f32);

    Ok(PaletteColor::from_rgb(mean))
}
