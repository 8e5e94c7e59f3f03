use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Category presentation config: display order + color table
// ---------------------------------------------------------------------------

/// Immutable presentation configuration for the known facility categories:
/// the fixed order the category chart emits them in, and the color each
/// maps to. Constructed once and passed where needed, never ambient state.
#[derive(Debug, Clone)]
pub struct CategoryStyle {
    entries: Vec<(String, Color32)>,
    default_color: Color32,
}

impl Default for CategoryStyle {
    fn default() -> Self {
        let entries = [
            ("Hospital", Color32::from_rgb(0xe7, 0x4c, 0x3c)),
            ("Health Center", Color32::from_rgb(0x34, 0x98, 0xdb)),
            ("Clinic", Color32::from_rgb(0x2e, 0xcc, 0x71)),
            ("School", Color32::from_rgb(0xf3, 0x9c, 0x12)),
            ("Police Station", Color32::from_rgb(0x34, 0x49, 0x5e)),
            ("University", Color32::from_rgb(0x9b, 0x59, 0xb6)),
        ]
        .iter()
        .map(|(name, color)| (name.to_string(), *color))
        .collect();

        CategoryStyle {
            entries,
            default_color: Color32::from_rgb(0x66, 0x7e, 0xea),
        }
    }
}

impl CategoryStyle {
    /// The fixed display order for the category histogram.
    pub fn order(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Look up the color for a category; unknown categories get the
    /// default color.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, color)| *color)
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Series palette for the comparison chart
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct series colors by stepping the hue 70°
/// per series for the comparison chart.
pub fn series_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 * 70.0) % 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.50);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
