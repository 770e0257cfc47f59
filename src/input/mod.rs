use crate::app::actions::Action;
use crate::app::events::InputEvent;
use crate::app::state::{AppState, Mode};
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<InputEvent>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        // The poll timeout bounds how long this outlives the app loop.
        while !tx.is_closed() {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    Ok(_) | Err(_) => continue,
                };
                if tx.blocking_send(ev).is_err() {
                    break;
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match (state.mode(), m.kind) {
            (Mode::Normal, MouseEventKind::ScrollUp) => Some(Action::SelectPrev),
            (Mode::Normal, MouseEventKind::ScrollDown) => Some(Action::SelectNext),
            _ => None,
        },
        InputEvent::Key(k) => match state.mode() {
            Mode::Normal => handle_normal_mode(k),
            Mode::Menu => handle_menu(k),
            Mode::Edit => handle_edit(k),
            Mode::Help => handle_help(k),
        },
    }
}

fn handle_normal_mode(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        // Selection - vim style
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            Some(Action::SelectPrev)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            Some(Action::SelectNext)
        }
        KeyCode::Char('g') | KeyCode::Home => Some(Action::SelectFirst),
        KeyCode::Char('G') | KeyCode::End => Some(Action::SelectLast),

        // Palette
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('a') => Some(Action::AddColor),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('x') => Some(Action::RemoveColor),
        KeyCode::Char(' ') | KeyCode::Char('s') => Some(Action::Shuffle),
        KeyCode::Enter | KeyCode::Char('e') => Some(Action::BeginEdit),

        KeyCode::Char('m') | KeyCode::Tab => Some(Action::ToggleMenu),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        _ => None,
    }
}

fn handle_menu(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Tab => Some(Action::ToggleMenu),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MenuDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::MenuActivate),
        _ => None,
    }
}

fn handle_edit(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::CancelEdit),
        KeyCode::Enter => Some(Action::CommitEdit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_help(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_normal_mode_keys() {
        let state = AppState::default();
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('+'))), Some(Action::AddColor));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('-'))), Some(Action::RemoveColor));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char(' '))), Some(Action::Shuffle));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('m'))), Some(Action::ToggleMenu));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_edit_mode_captures_characters() {
        let mut state = AppState::default();
        state.edit_buffer = Some(String::new());
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::InputChar('q')));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::CancelEdit));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::CommitEdit));
    }

    #[test]
    fn test_menu_mode_keys() {
        let mut state = AppState::default();
        state.toggle_menu();
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::ToggleMenu));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Down)), Some(Action::MenuDown));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::MenuActivate));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('+'))), None);
    }

    #[test]
    fn test_help_mode_keys() {
        let mut state = AppState::default();
        state.show_help = true;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('?'))), Some(Action::ToggleHelp));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('s'))), None);
    }
}
