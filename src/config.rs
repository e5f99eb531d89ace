use crate::error::{PaletteError, Result};

pub const DEFAULT_LEVELS: u32 = 3;
pub const DEFAULT_WHITE_THRESHOLD: f32 = 0.98;
pub const DEFAULT_BLACK_THRESHOLD: f32 = 0.12;
pub const DEFAULT_TARGET_HUE_OFFSET: f32 = 1.0 / 6.0;

/// Upper bound on bucketization depth (256 palette colors).
pub const MAX_LEVELS: u32 = 8;

/// Tunable parameters of the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Median-cut depth; the palette has up to `2^levels` colors.
    pub levels: u32,
    /// Samples with every channel above this are dropped as near-white.
    pub white_threshold: f32,
    /// Samples with every channel below this are dropped as near-black.
    pub black_threshold: f32,
    /// Preferred hue separation of the chosen pair, as a fraction of the hue circle.
    pub target_hue_offset: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            white_threshold: DEFAULT_WHITE_THRESHOLD,
            black_threshold: DEFAULT_BLACK_THRESHOLD,
            target_hue_offset: DEFAULT_TARGET_HUE_OFFSET,
        }
    }
}

impl PipelineConfig {
    /// Check every field is within its documented range.
    pub fn validate(&self) -> Result<()> {
        if self.levels == 0 || self.levels > MAX_LEVELS {
            return Err(PaletteError::InvalidConfig(format!(
                "levels must be between 1 and {MAX_LEVELS}, got {}",
                self.levels
            )));
        }
        check_unit("white_threshold", self.white_threshold)?;
        check_unit("black_threshold", self.black_threshold)?;
        check_unit("target_hue_offset", self.target_hue_offset)?;
        if self.black_threshold > self.white_threshold {
            return Err(PaletteError::InvalidConfig(format!(
                "black_threshold ({}) must not exceed white_threshold ({})",
                self.black_threshold, self.white_threshold
            )));
        }
        Ok(())
    }
}

fn check_unit(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PaletteError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}
