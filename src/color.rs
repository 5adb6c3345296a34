use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::VOICE_COUNT;

// ---------------------------------------------------------------------------
// Voice colours
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Fixed colour assignment for the eight voice series. The same palette
/// feeds every subplot and the figure-level legend, so a voice always has
/// one colour everywhere.
#[derive(Debug, Clone)]
pub struct VoicePalette {
    colors: Vec<Color32>,
    default_color: Color32,
}

impl Default for VoicePalette {
    fn default() -> Self {
        VoicePalette {
            colors: generate_palette(VOICE_COUNT as usize),
            default_color: Color32::GRAY,
        }
    }
}

impl VoicePalette {
    /// Look up the colour for a voice index.
    pub fn color_for(&self, voice: u8) -> Color32 {
        self.colors
            .get(voice as usize)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Legend entries (label → colour) for the figure-level legend.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.colors
            .iter()
            .enumerate()
            .map(|(v, c)| (format!("voice {v}"), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_every_voice_distinctly() {
        let palette = VoicePalette::default();
        let entries = palette.legend_entries();
        assert_eq!(entries.len(), VOICE_COUNT as usize);
        assert_eq!(entries[0].0, "voice 0");
        assert_eq!(entries[7].0, "voice 7");

        for v in 0..VOICE_COUNT {
            for w in (v + 1)..VOICE_COUNT {
                assert_ne!(palette.color_for(v), palette.color_for(w));
            }
        }
    }

    #[test]
    fn out_of_range_voice_gets_the_default_colour() {
        let palette = VoicePalette::default();
        assert_eq!(palette.color_for(200), Color32::GRAY);
    }
}
