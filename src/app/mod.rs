pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::messages::{self, MessageCatalog};
use crate::options::{self, KeyValueStore};
use crate::palette::Palette;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::InputEvent;
use state::{AppState, MenuItem, Toast};
use tokio::sync::mpsc;

/// Longest accepted edit input (`#RRGGBB`).
const MAX_HEX_INPUT: usize = 7;

pub struct App {
    cfg: Config,
    state: AppState,
    store: Box<dyn KeyValueStore>,
    catalog: &'static MessageCatalog,
}

impl App {
    pub fn new(cfg: Config, store: Box<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let mut palette = Palette::new(cfg.initial_count());
        palette.seed_random(&mut rand::rng())?;

        let mut app = Self {
            cfg,
            state: AppState::new(palette),
            store,
            catalog: MessageCatalog::builtin(),
        };
        app.sync_options();
        Ok(app)
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<InputEvent>(256);
        input::spawn_input_task(tx, self.cfg.input.mouse);

        tui::draw(terminal, self.catalog, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            if let Some(action) = input::map_input_to_action(&self.state, ev) {
                self.handle_action(action);
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, self.catalog, &mut self.state)?;
        }

        Ok(())
    }

    /// Reload options from the store, discarding in-memory changes.
    pub fn sync_options(&mut self) {
        self.state.options = options::load_options(self.store.as_ref());
    }

    pub fn handle_action(&mut self, action: Action) {
        tracing::debug!(?action, "handle action");
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Resize => {}

            Action::SelectPrev => self.state.select_prev(),
            Action::SelectNext => self.state.select_next(),
            Action::SelectFirst => self.state.selected = 0,
            Action::SelectLast => self.state.select_last(),

            Action::AddColor => {
                if !self.state.palette.add_color() {
                    self.toast_error("max_colors");
                }
            }
            Action::RemoveColor => {
                if self.state.palette.remove_color() {
                    self.state.clamp_selection();
                } else {
                    self.toast_error("min_colors");
                }
            }
            Action::Shuffle => {
                if let Err(e) = self.state.palette.shuffle_colors(&mut rand::rng()) {
                    tracing::warn!("shuffle: {e}");
                    self.toast_error("invalid_color");
                }
            }

            Action::BeginEdit => {
                let current = self
                    .state
                    .palette
                    .colors()
                    .get(self.state.selected)
                    .map(|s| s.hex().to_string());
                if let Some(hex) = current {
                    self.state.edit_buffer = Some(hex);
                }
            }
            Action::InputChar(c) => {
                if let Some(buf) = self.state.edit_buffer.as_mut()
                    && (c.is_ascii_hexdigit() || (c == '#' && buf.is_empty()))
                    && buf.len() < MAX_HEX_INPUT
                {
                    buf.push(c.to_ascii_uppercase());
                }
            }
            Action::Backspace => {
                if let Some(buf) = self.state.edit_buffer.as_mut() {
                    buf.pop();
                }
            }
            Action::CommitEdit => self.commit_edit(),
            Action::CancelEdit => self.state.edit_buffer = None,

            Action::ToggleMenu => self.state.toggle_menu(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::MenuUp => self.state.menu_selected = self.state.menu_selected.prev(),
            Action::MenuDown => self.state.menu_selected = self.state.menu_selected.next(),
            Action::MenuActivate => self.activate_menu_item(),
        }
    }

    fn commit_edit(&mut self) {
        let Some(value) = self.state.edit_buffer.clone() else {
            return;
        };
        match self
            .state
            .palette
            .set_color_at_position(self.state.selected, &value)
        {
            Ok(()) => self.state.edit_buffer = None,
            Err(e) => {
                tracing::debug!("rejected edit: {e}");
                // Keep the prompt open so the value can be fixed.
                self.toast_error("invalid_color");
            }
        }
    }

    fn activate_menu_item(&mut self) {
        match self.state.menu_selected {
            MenuItem::ColorMode => {
                self.state.options.color_mode = self.state.options.color_mode.toggle();
            }
            MenuItem::Language => {
                let Some(next) = self.catalog.next_language(&self.state.options.language) else {
                    return;
                };
                self.state.options.language = next.to_string();
            }
        }

        match options::save_options(self.store.as_ref(), &self.state.options) {
            Ok(()) => self.state.toast = Some(Toast::success(self.text("options_saved"))),
            Err(e) => {
                tracing::warn!("save options: {e:#}");
                self.state.toast = Some(Toast::error(format!("{e:#}")));
            }
        }
    }

    fn text(&self, key: &str) -> String {
        let msgs = messages::messages_or_default(self.catalog, &self.state.options.language);
        messages::text(msgs, key).to_string()
    }

    fn toast_error(&mut self, key: &str) {
        self.state.toast = Some(Toast::error(self.text(key)));
    }
}
