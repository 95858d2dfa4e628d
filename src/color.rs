use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use genre_lens::data::GenreTable;

// ---------------------------------------------------------------------------
// Color palette generator
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

// ---------------------------------------------------------------------------
// Genre → Color32
// ---------------------------------------------------------------------------

/// One distinct colour per genre, assigned in genre-name order.
#[derive(Debug, Clone, Default)]
pub struct GenreColors {
    mapping: BTreeMap<String, Color32>,
}

impl GenreColors {
    pub fn new(genres: &GenreTable) -> Self {
        let palette = generate_palette(genres.len());
        let mapping = genres
            .iter()
            .zip(palette)
            .map(|(row, c)| (row.genre.clone(), c))
            .collect();
        GenreColors { mapping }
    }

    pub fn color_for(&self, genre: &str) -> Color32 {
        self.mapping.get(genre).copied().unwrap_or(Color32::GRAY)
    }
}
