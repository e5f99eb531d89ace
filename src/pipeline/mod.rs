//! Color extraction pipeline: filter, median-cut, average, select.

pub mod average;
pub mod bucket;
pub mod filter;
pub mod select;

use tracing::debug;

use crate::color::{PaletteColor, Sample};
use crate::config::PipelineConfig;
use crate::error::Result;

use self::average::average;
use self::bucket::bucketize;
use self::filter::{filter_pixels, Thresholds};
use self::select::{select_pair, ColorPair};

/// Reduce raw pixels to the averaged bucket colors, in split order.
pub fn extract_palette(pixels: &[Sample], config: &PipelineConfig) -> Result<Vec<PaletteColor>> {
    config.validate()?;

    let kept = filter_pixels(
        pixels,
        Thresholds {
            white: config.white_threshold,
            black: config.black_threshold,
        },
    )?;
    debug!(
        total = pixels.len(),
        kept = kept.len(),
        "filtered near-white and near-black pixels"
    );

    let buckets = bucketize(kept, config.levels);
    let palette = buckets.iter().map(average).collect::<Result<Vec<_>>>()?;

    for (i, color) in palette.iter().enumerate() {
        debug!(
            bucket = i,
            color = %color.to_color(),
            hue = color.hue,
            saturation = color.saturation,
            value = color.value,
            "palette color"
        );
    }
    Ok(palette)
}

/// Run the full pipeline and return the chosen pair, darker first.
pub fn extract_pair(pixels: &[Sample], config: &PipelineConfig) -> Result<ColorPair> {
    let palette = extract_palette(pixels, config)?;
    select_pair(&palette, config.target_hue_offset)
}
