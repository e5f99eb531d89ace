use tracing::debug;

use crate::color::{Color, PaletteColor};
use crate::error::{PaletteError, Result};

/// Two palette colors, darker (lower HSV value) first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub dark: PaletteColor,
    pub light: PaletteColor,
}

impl ColorPair {
    /// Order two colors so the lower value comes first. Equal values keep
    /// their given order.
    pub fn ordered(a: PaletteColor, b: PaletteColor) -> Self {
        if a.value > b.value {
            Self { dark: b, light: a }
        } else {
            Self { dark: a, light: b }
        }
    }

    /// Both colors as clamped 8-bit RGB, darker first.
    pub fn to_colors(self) -> [Color; 2] {
        [self.dark.to_color(), self.light.to_color()]
    }
}

/// Distance between two hues on the unit circle, in [0, 0.5].
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs().rem_euclid(1.0);
    d.min(1.0 - d)
}

/// How far a pair's hue separation is from `target_offset`. Lower is better.
pub fn fitness(a: &PaletteColor, b: &PaletteColor, target_offset: f32) -> f32 {
    (target_offset - hue_distance(a.hue, b.hue)).abs()
}

/// Pick the pair of palette colors whose hue separation is closest to
/// `target_offset`, then order it darker first.
///
/// Pairs are scanned as `(i, j)` with `i < j` in ascending order; the first
/// pair reaching the minimum fitness wins.
pub fn select_pair(palette: &[PaletteColor], target_offset: f32) -> Result<ColorPair> {
    if palette.len() < 2 {
        return Err(PaletteError::InsufficientPalette {
            found: palette.len(),
        });
    }

    let mut best = (0, 1);
    let mut best_fitness = f32::INFINITY;
    for i in 0..palette.len() {
        for j in (i + 1)..palette.len() {
            let f = fitness(&palette[i], &palette[j], target_offset);
            if f < best_fitness {
                best = (i, j);
                best_fitness = f;
            }
        }
    }

    debug!(
        first = best.0,
        second = best.1,
        fitness = best_fitness,
        "selected palette pair"
    );
    Ok(ColorPair::ordered(palette[best.0], palette[best.1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIXTH: f32 = 1.0 / 6.0;

    fn hue(h: f32, v: f32) -> PaletteColor {
        PaletteColor::new(h, 1.0, v)
    }

    #[test]
    fn hue_distance_wraps() {
        assert!((hue_distance(0.95, 0.05) - 0.1).abs() < 1e-6);
        assert!((hue_distance(0.0, 0.5) - 0.5).abs() < 1e-6);
        assert_eq!(hue_distance(0.0, 1.0), 0.0);
        assert_eq!(hue_distance(0.3, 0.3), 0.0);
    }

    #[test]
    fn hue_distance_is_symmetric() {
        for (a, b) in [(0.1, 0.7), (0.0, 0.99), (0.42, 0.17)] {
            assert_eq!(hue_distance(a, b), hue_distance(b, a));
        }
    }

    #[test]
    fn picks_pair_closest_to_target_offset() {
        let palette = [
            hue(0.00, 0.5),
            hue(0.02, 0.6), // too close to the first
            hue(0.50, 0.7), // too far
            hue(0.17, 0.8), // ~1/6 from the first
        ];
        let pair = select_pair(&palette, SIXTH).unwrap();
        assert_eq!(pair.dark, palette[0]);
        assert_eq!(pair.light, palette[3]);
    }

    #[test]
    fn pair_across_the_wrap_point() {
        let palette = [hue(0.9, 0.4), hue(0.4, 0.9), hue(0.07, 0.6)];
        // 0.9 and 0.07 are 0.17 apart going through 0.
        let pair = select_pair(&palette, SIXTH).unwrap();
        assert_eq!(pair.dark, palette[0]);
        assert_eq!(pair.light, palette[2]);
    }

    #[test]
    fn output_is_darker_first() {
        let palette = [hue(0.0, 0.9), hue(SIXTH, 0.2)];
        let pair = select_pair(&palette, SIXTH).unwrap();
        assert!(pair.dark.value <= pair.light.value);
        assert_eq!(pair.dark, palette[1]);
    }

    #[test]
    fn ties_go_to_first_enumerated_pair() {
        // (0,1) and (2,3) both separate by exactly 0.25.
        let palette = [hue(0.0, 0.3), hue(0.25, 0.4), hue(0.5, 0.5), hue(0.75, 0.6)];
        let pair = select_pair(&palette, SIXTH).unwrap();
        assert_eq!(pair.dark, palette[0]);
        assert_eq!(pair.light, palette[1]);
    }

    #[test]
    fn equal_values_keep_enumeration_order() {
        let a = hue(0.1, 0.5);
        let b = hue(0.3, 0.5);
        let pair = ColorPair::ordered(a, b);
        assert_eq!((pair.dark, pair.light), (a, b));
    }

    #[test]
    fn selection_is_deterministic() {
        let palette: Vec<PaletteColor> = (0..16)
            .map(|i| hue((i * 5 % 16) as f32 / 16.0, (i % 7) as f32 / 7.0))
            .collect();
        let first = select_pair(&palette, SIXTH).unwrap();
        for _ in 0..10 {
            assert_eq!(select_pair(&palette, SIXTH).unwrap(), first);
        }
    }

    #[test]
    fn too_small_palette_is_an_error() {
        assert_eq!(
            select_pair(&[], SIXTH),
            Err(PaletteError::InsufficientPalette { found: 0 })
        );
        assert_eq!(
            select_pair(&[hue(0.2, 0.5)], SIXTH),
            Err(PaletteError::InsufficientPalette { found: 1 })
        );
    }

    #[test]
    fn to_colors_clamps_into_byte_range() {
        let pair = ColorPair::ordered(
            PaletteColor::new(0.0, 1.0, 1.0000001),
            PaletteColor::new(0.5, 0.0, -0.0000001),
        );
        let [dark, light] = pair.to_colors();
        assert_eq!(dark, Color::new(0, 0, 0));
        assert_eq!(light, Color::new(255, 0, 0));
    }
}
