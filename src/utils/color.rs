// Pastel display colors for timeline items

use serde::{Deserialize, Serialize};

const GOLDEN_ANGLE_DEGREES: f64 = 137.508;
const SATURATION: f64 = 0.70;
const LIGHTNESS: f64 = 0.80;

/// A pastel HSL color with fixed saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemColor {
    hue: f64,
}

impl ItemColor {
    /// Color for a row id. Hues step by the golden angle so neighbouring ids
    /// land far apart on the wheel.
    pub fn for_id(id: i64) -> Self {
        let hue = (id as f64 * GOLDEN_ANGLE_DEGREES).rem_euclid(360.0);
        Self { hue }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// CSS notation, e.g. `hsl(137.5, 70%, 80%)`.
    pub fn css(&self) -> String {
        format!("hsl({:.1}, 70%, 80%)", self.hue)
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        let chroma = (1.0 - (2.0 * LIGHTNESS - 1.0).abs()) * SATURATION;
        let sector = self.hue / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let m = LIGHTNESS - chroma / 2.0;

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [channel(r), channel(g), channel(b)]
    }
}
