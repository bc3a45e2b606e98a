//! Color module for the seating chart.
//!
//! Seat colors come from the Okabe-Ito colorblind-safe palette so that
//! neighboring seats stay distinguishable for people with various forms
//! of color vision deficiency.
//!
//! Reference: https://jfly.uni-koeln.de/color/

use ratatui::style::Color;

/// Okabe-Ito colorblind-safe palette (8 colors)
pub const SEAT_COLORS: [Color; 8] = [
    Color::Rgb(0, 114, 178),   // Blue
    Color::Rgb(230, 159, 0),   // Orange
    Color::Rgb(0, 158, 115),   // Bluish Green
    Color::Rgb(240, 228, 66),  // Yellow
    Color::Rgb(86, 180, 233),  // Sky Blue
    Color::Rgb(213, 94, 0),    // Vermillion
    Color::Rgb(204, 121, 167), // Reddish Purple
    Color::Rgb(136, 136, 136), // Gray
];

/// Get a seat color by index, wrapping around the palette
pub fn seat_color(index: usize) -> Color {
    SEAT_COLORS[index % SEAT_COLORS.len()]
}

/// Dim an RGB color by a factor in [0, 1]
pub fn dim_color(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}
