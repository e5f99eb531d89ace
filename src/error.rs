//! Error types for the color extraction core.

use thiserror::Error;

/// Result type alias for core pipeline operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Conditions under which no color pair can be produced.
///
/// All of these end the current run; the caller decides whether to skip the
/// image or abort.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Every sample was filtered out as near-white or near-black.
    #[error("no usable pixels left after filtering near-white and near-black samples")]
    EmptyInput,

    /// A bucket with no samples reached the averaging stage.
    #[error("cannot average an empty bucket")]
    EmptyBucket,

    /// Fewer than two palette colors to choose a pair from.
    #[error("need at least 2 palette colors to pick a pair, found {found}")]
    InsufficientPalette { found: usize },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failures while reading text pixel dumps.
#[derive(Error, Debug)]
pub enum DumpError {
    /// The underlying stream could not be read.
    #[error("failed to read pixel stream: {0}")]
    Io(#[from] std::io::Error),

    /// One dump held a token that is not a hex byte. The reader has already
    /// moved past the end of that dump.
    #[error("invalid hex byte {token:?} on line {line}")]
    Malformed { token: String, line: usize },
}
