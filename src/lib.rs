//! Extract two contrasting gradient colors from an image.
//!
//! Pixels are filtered, split into buckets by recursive median cut, averaged
//! into a small HSV palette, and the pair whose hue separation is closest to
//! a target offset is returned darker first.

pub mod backends;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;

pub use color::{Color, PaletteColor, Sample};
pub use config::PipelineConfig;
pub use error::PaletteError;
pub use pipeline::select::ColorPair;
pub use pipeline::{extract_pair, extract_palette};
