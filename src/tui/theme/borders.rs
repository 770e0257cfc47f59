//! Border styles

use ratatui::symbols::border;

/// Rounded borders for panels, thick ones for overlays drawn on top of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    pub fn to_border_set() -> border::Set<'static> {
        border::ROUNDED
    }

    pub fn overlay_set() -> border::Set<'static> {
        border::THICK
    }
}
