//! UI chrome colors for the light and dark color modes

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct UiColors {
    pub bg: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl UiColors {
    pub const LIGHT: Self = Self {
        bg: Color::Rgb(250, 250, 250),          // #fafafa
        fg_primary: Color::Rgb(24, 24, 24),     // #181818
        fg_secondary: Color::Rgb(110, 110, 110), // #6e6e6e
        accent: Color::Rgb(40, 40, 40),         // #282828
        border: Color::Rgb(190, 190, 190),      // #bebebe
        success: Color::Rgb(30, 120, 60),       // #1e783c
        error: Color::Rgb(180, 30, 30),         // #b41e1e
    };

    pub const DARK: Self = Self {
        bg: Color::Rgb(0, 0, 0),                 // #000000
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        accent: Color::Rgb(255, 255, 255),       // #ffffff
        border: Color::Rgb(64, 64, 64),          // #404040
        success: Color::Rgb(120, 220, 140),      // #78dc8c
        error: Color::Rgb(255, 110, 110),        // #ff6e6e
    };
}

/// Black or white, whichever reads better on top of `rgb`.
pub fn contrast_fg(rgb: [u8; 3]) -> Color {
    let [r, g, b] = rgb.map(f64::from);
    let luma = 0.299 * r + 0.587 * g + 0.114 * b;
    if luma > 140.0 {
        Color::Rgb(0, 0, 0)
    } else {
        Color::Rgb(255, 255, 255)
    }
}
