//! Theme configuration - follows the user's color mode

pub mod borders;
pub mod colors;

pub use borders::BorderStyle;
pub use colors::{UiColors, contrast_fg};

use crate::options::ColorMode;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: UiColors,
}

impl Theme {
    pub fn new(mode: ColorMode) -> Self {
        let colors = match mode {
            ColorMode::Light => UiColors::LIGHT,
            ColorMode::Dark => UiColors::DARK,
        };
        Self { colors }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        BorderStyle::to_border_set()
    }

    pub fn overlay_border_set(&self) -> ratatui::symbols::border::Set<'static> {
        BorderStyle::overlay_set()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}
