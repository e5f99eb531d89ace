use anyhow::{bail, Result};
use palette::{FromColor, Hsv, Srgb};

/// A single pixel sample with each channel normalized to [0, 1].
pub type Sample = Srgb<f32>;

/// 8-bit sRGB color, the form written to visualizer configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            bail!(
                "invalid hex color: expected 6 hex digits, got {}",
                hex.len()
            );
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self { r, g, b })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Normalize to a [0, 1] sample.
    pub fn to_sample(self) -> Sample {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Clamp an `Srgb<f32>` to [0, 1] and scale to 8 bits.
    ///
    /// HSV round trips can land a hair outside the unit range; clamping first
    /// keeps every channel inside [0, 255].
    pub fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        fn channel(c: f32) -> u8 {
            if c.is_nan() {
                return 0;
            }
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self {
            r: channel(srgb.red),
            g: channel(srgb.green),
            b: channel(srgb.blue),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A palette entry in HSV space. All components lie in [0, 1]; hue wraps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl PaletteColor {
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert an RGB sample to HSV. Achromatic inputs get hue 0.
    pub fn from_rgb(rgb: Sample) -> Self {
        let hsv: Hsv = Hsv::from_color(rgb);
        let hue = hsv.hue.into_positive_degrees() / 360.0;
        Self {
            hue: if hue >= 1.0 { 0.0 } else { hue },
            saturation: hsv.saturation,
            value: hsv.value,
        }
    }

    /// Convert back to RGB.
    pub fn to_rgb(self) -> Sample {
        let hsv: Hsv = Hsv::new(self.hue * 360.0, self.saturation, self.value);
        Srgb::from_color(hsv)
    }

    pub fn to_color(self) -> Color {
        Color::from_srgb_f32_clamped(self.to_rgb())
    }
}
