use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{FromColor, Hsl, Srgb};

const SATURATION: f32 = 0.65;
/// Neighbouring hues alternate between these so adjacent columns separate.
const LIGHTNESS: [f32; 2] = [0.45, 0.6];
/// Start at blue rather than red.
const HUE_OFFSET: f32 = 210.0;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` colours on evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = HUE_OFFSET + 360.0 * i as f32 / n as f32;
            let hsl = Hsl::new(hue, SATURATION, LIGHTNESS[i % LIGHTNESS.len()]);
            let rgb: Srgb<u8> = Srgb::<f32>::from_color(hsl).into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Column colours: plotted column name → Color32
// ---------------------------------------------------------------------------

/// One colour per plotted column.
#[derive(Debug, Clone)]
pub struct ColumnColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColumnColors {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        let mapping = columns
            .iter()
            .zip(generate_palette(columns.len()))
            .map(|(name, c)| (name.as_ref().to_string(), c))
            .collect();

        ColumnColors {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    pub fn color_for(&self, column: &str) -> Color32 {
        self.mapping
            .get(column)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        for i in 0..p.len() {
            for j in (i + 1)..p.len() {
                assert_ne!(p[i], p[j]);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_column_gets_default() {
        let colors = ColumnColors::new(&["a", "b"]);
        assert_eq!(colors.color_for("a"), generate_palette(2)[0]);
        assert_ne!(colors.color_for("a"), colors.color_for("b"));
        assert_eq!(colors.color_for("zzz"), Color32::LIGHT_BLUE);
    }
}
