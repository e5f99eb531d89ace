pub mod cava;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::color::Color;

/// A visualizer config that stores a two-stop color gradient.
pub trait GradientBackend {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Current gradient colors in `config`, darker first, if both are set.
    fn read_colors(&self, config: &str) -> Result<Option<[Color; 2]>>;

    /// Return `config` with the gradient colors replaced.
    fn apply(&self, config: &str, colors: [Color; 2]) -> Result<String>;

    /// Location of the config file when none is given.
    fn default_path(&self) -> Result<PathBuf>;

    /// Rewrite the gradient colors in the config file at `path`.
    ///
    /// Returns `false` without touching the file when the colors are
    /// already current or the config has no gradient keys to rewrite.
    fn write_to(&self, colors: [Color; 2], path: &Path) -> Result<bool> {
        let current = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {} config: {}", self.name(), path.display()))?;

        if self.read_colors(&current)? == Some(colors) {
            debug!(path = %path.display(), "gradient colors already current");
            return Ok(false);
        }

        let updated = self.apply(&current, colors)?;
        if updated == current {
            debug!(path = %path.display(), "no gradient keys to update");
            return Ok(false);
        }
        std::fs::write(path, updated)
            .with_context(|| format!("failed to write {} config: {}", self.name(), path.display()))?;
        info!(
            path = %path.display(),
            dark = %colors[0],
            light = %colors[1],
            "updated gradient colors"
        );
        Ok(true)
    }

    /// Rewrite the gradient colors in the default config file and return its path.
    fn install(&self, colors: [Color; 2]) -> Result<PathBuf> {
        let path = self.default_path()?;
        self.write_to(colors, &path)?;
        Ok(path)
    }
}

/// `$XDG_CONFIG_HOME`, falling back to `$HOME/.config`.
pub(crate) fn config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
            PathBuf::from(home).join(".config")
        })
}
