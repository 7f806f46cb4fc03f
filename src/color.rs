use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

pub const POINTS_LINE: Color32 = Color32::from_rgb(128, 0, 128);
pub const FG_HISTOGRAM: Color32 = Color32::from_rgb(255, 165, 0);
pub const TREND_LINE: Color32 = Color32::from_rgb(220, 40, 40);
pub const SCATTER: Color32 = Color32::from_rgb(31, 119, 180);

/// Generates `n` soft, visually distinct colours using evenly spaced hues.
pub fn pastel_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.65, 0.78))
        })
        .collect()
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Fill colours for the loss / win bars, in that order.
pub fn outcome_colors() -> [Color32; 2] {
    let palette = pastel_palette(2);
    [palette[0], palette[1]]
}
