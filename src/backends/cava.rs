use std::path::PathBuf;

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use tracing::warn;

use crate::color::Color;

use super::{config_home, GradientBackend};

/// Gradient keys, darker color first.
const KEYS: [&str; 2] = ["gradient_color_1", "gradient_color_2"];

/// cava audio visualizer config (`~/.config/cava/config`).
///
/// Only the `gradient_color_1` and `gradient_color_2` lines are touched;
/// every other byte of the file is preserved.
pub struct CavaBackend;

impl GradientBackend for CavaBackend {
    fn name(&self) -> &str {
        "cava"
    }

    fn read_colors(&self, config: &str) -> Result<Option<[Color; 2]>> {
        let mut found = [Color::new(0, 0, 0); 2];
        for (slot, key) in KEYS.iter().enumerate() {
            let Some(caps) = key_pattern(key)?.captures(config) else {
                return Ok(None);
            };
            found[slot] = Color::from_hex(&caps["hex"])
                .with_context(|| format!("bad {key} value in cava config"))?;
        }
        Ok(Some(found))
    }

    fn apply(&self, config: &str, colors: [Color; 2]) -> Result<String> {
        let mut out = config.to_string();
        for (key, color) in KEYS.iter().zip(colors) {
            let re = key_pattern(key)?;
            if !re.is_match(&out) {
                warn!(key, "cava config has no line for this key; leaving it unset");
                continue;
            }
            let line = format!("{key} = '{}'", color.to_hex());
            out = re
                .replace_all(&out, |caps: &Captures| format!("{line}{}", &caps["eol"]))
                .into_owned();
        }
        Ok(out)
    }

    fn default_path(&self) -> Result<PathBuf> {
        Ok(config_home().join("cava").join("config"))
    }
}

/// Matches an uncommented `key = '#rrggbb'` line. Quotes are optional; a
/// CRLF line ending is captured as `eol` so rewrites keep it.
fn key_pattern(key: &str) -> Result<Regex> {
    let pattern = format!(
        r#"(?m)^{}[ \t]*=[ \t]*['"]?(?P<hex>#[0-9a-fA-F]{{6}})['"]?[ \t]*(?P<eol>\r?)$"#,
        regex::escape(key)
    );
    Regex::new(&pattern).with_context(|| format!("invalid pattern for key {key}"))
}
