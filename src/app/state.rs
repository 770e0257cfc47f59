use crate::options::Options;
use crate::palette::Palette;

/// Which layer currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Menu,
    Edit,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    ColorMode,
    Language,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::ColorMode, MenuItem::Language];

    pub fn next(self) -> Self {
        match self {
            MenuItem::ColorMode => MenuItem::Language,
            MenuItem::Language => MenuItem::ColorMode,
        }
    }

    pub fn prev(self) -> Self {
        // Two entries: stepping back is the same as stepping forward.
        self.next()
    }

    /// Message key of the entry label.
    pub fn label_key(self) -> &'static str {
        match self {
            MenuItem::ColorMode => "color_mode",
            MenuItem::Language => "language",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// The whole UI state tree. Owned by `App`, borrowed by widgets.
pub struct AppState {
    pub should_quit: bool,

    pub palette: Palette,
    pub selected: usize,

    pub options: Options,

    // Overlays
    pub show_menu: bool,
    pub menu_selected: MenuItem,
    pub show_help: bool,

    /// Hex input buffer while editing the selected swatch.
    pub edit_buffer: Option<String>,

    pub toast: Option<Toast>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl AppState {
    pub fn new(palette: Palette) -> Self {
        Self {
            should_quit: false,
            palette,
            selected: 0,
            options: Options::default(),
            show_menu: false,
            menu_selected: MenuItem::default(),
            show_help: false,
            edit_buffer: None,
            toast: None,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.edit_buffer.is_some() {
            Mode::Edit
        } else if self.show_menu {
            Mode::Menu
        } else if self.show_help {
            Mode::Help
        } else {
            Mode::Normal
        }
    }

    pub fn toggle_menu(&mut self) {
        self.show_menu = !self.show_menu;
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.palette.colors().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_last(&mut self) {
        self.selected = self.palette.colors().len().saturating_sub(1);
    }

    /// Keep the selection inside the palette after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.palette.colors().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_priority() {
        let mut state = AppState::default();
        assert_eq!(state.mode(), Mode::Normal);
        state.show_help = true;
        assert_eq!(state.mode(), Mode::Help);
        state.toggle_menu();
        assert_eq!(state.mode(), Mode::Menu);
        state.edit_buffer = Some(String::new());
        assert_eq!(state.mode(), Mode::Edit);
    }

    #[test]
    fn test_selection_bounds() {
        let mut palette = Palette::new(5);
        palette.seed_defaults("#000", "#fff").unwrap();
        let mut state = AppState::new(palette);

        state.select_prev();
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.selected, 4);

        state.selected = 9;
        state.clamp_selection();
        assert_eq!(state.selected, 4);
    }

    #[test]
    fn test_menu_cycles() {
        assert_eq!(MenuItem::ColorMode.next(), MenuItem::Language);
        assert_eq!(MenuItem::Language.next(), MenuItem::ColorMode);
        assert_eq!(MenuItem::Language.prev(), MenuItem::ColorMode);
    }
}
