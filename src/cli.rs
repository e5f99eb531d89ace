use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    PipelineConfig, DEFAULT_BLACK_THRESHOLD, DEFAULT_LEVELS, DEFAULT_TARGET_HUE_OFFSET,
    DEFAULT_WHITE_THRESHOLD, MAX_LEVELS,
};

/// Pick two contrasting gradient colors from an image (album art, wallpaper)
/// and optionally write them into a cava config.
#[derive(Parser, Debug)]
#[command(name = "duotone", version, about)]
pub struct Args {
    /// Path to the input image
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    pub image: Option<PathBuf>,

    /// Read text pixel dumps (dbus-monitor `image_data` output) from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Keep reading dumps from stdin until it closes
    #[arg(long, requires = "stdin")]
    pub follow: bool,

    /// Only use dumps that follow a line mentioning this player
    #[arg(long, requires = "stdin")]
    pub player: Option<String>,

    /// Median-cut depth; the palette has 2^LEVELS colors
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LEVELS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_LEVELS as i64)
    )]
    pub levels: u32,

    /// Drop pixels with every channel above this (0-1)
    #[arg(long, default_value_t = DEFAULT_WHITE_THRESHOLD)]
    pub white_threshold: f32,

    /// Drop pixels with every channel below this (0-1)
    #[arg(long, default_value_t = DEFAULT_BLACK_THRESHOLD)]
    pub black_threshold: f32,

    /// Preferred hue separation between the two colors (fraction of the hue circle)
    #[arg(long, default_value_t = DEFAULT_TARGET_HUE_OFFSET)]
    pub hue_offset: f32,

    /// Rewrite the gradient colors in this cava config file
    #[arg(short = 'o', long = "config")]
    pub config: Option<PathBuf>,

    /// Rewrite the gradient colors in ~/.config/cava/config
    #[arg(long, conflicts_with = "config")]
    pub install: bool,

    /// Log palette and selection details to stderr
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            levels: self.levels,
            white_threshold: self.white_threshold,
            black_threshold: self.black_threshold,
            target_hue_offset: self.hue_offset,
        }
    }
}
