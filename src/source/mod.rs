//! Pixel sources feeding the pipeline.

pub mod dump;
pub mod file;

pub use dump::DumpReader;
pub use file::load_image;
