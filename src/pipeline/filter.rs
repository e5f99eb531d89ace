use crate::color::Sample;
use crate::error::{PaletteError, Result};

/// Brightness cutoffs for dropping background and border pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub white: f32,
    pub black: f32,
}

impl Thresholds {
    /// Every channel above the white cutoff.
    fn is_near_white(&self, s: &Sample) -> bool {
        s.red > self.white && s.green > self.white && s.blue > self.white
    }

    /// Every channel below the black cutoff.
    fn is_near_black(&self, s: &Sample) -> bool {
        s.red < self.black && s.green < self.black && s.blue < self.black
    }
}

/// Drop near-white and near-black samples, preserving input order.
///
/// Fails with [`PaletteError::EmptyInput`] when nothing survives.
pub fn filter_pixels(pixels: &[Sample], thresholds: Thresholds) -> Result<Vec<Sample>> {
    let kept: Vec<Sample> = pixels
        .iter()
        .filter(|s| !thresholds.is_near_white(s) && !thresholds.is_near_black(s))
        .copied()
        .collect();

    if kept.is_empty() {
        return Err(PaletteError::EmptyInput);
    }
    Ok(kept)
}
