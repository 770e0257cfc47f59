//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, ToastKind};
use crate::messages::{self, MessageCatalog, Messages};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{help, menu, prompt, swatches};

/// Main layout structure:
/// ┌──────────────────────────────────────────────┐
/// │ Title                           Colors: 5/12  │
/// ├──────┬──────┬──────┬──────┬──────────────────┤
/// │      │      │      │      │                  │
/// │ swatch columns, one per palette entry        │
/// │      │      │      │      │                  │
/// ├──────┴──────┴──────┴──────┴──────────────────┤
/// │ key hints / toast                            │
/// └──────────────────────────────────────────────┘
///
/// Menu, help and the hex prompt are drawn as overlays on top.
pub fn render(frame: &mut Frame, catalog: &MessageCatalog, state: &AppState) {
    let theme = Theme::new(state.options.color_mode);
    let msgs = messages::messages_or_default(catalog, &state.options.language);
    let root = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.colors.bg)),
        root,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Swatches
            Constraint::Length(1), // Footer
        ])
        .split(root);

    render_header(frame, state, msgs, &theme, rows[0]);
    swatches::render(frame, state, &theme, rows[1]);
    render_footer(frame, state, msgs, &theme, rows[2]);

    if state.show_help {
        help::render(frame, msgs, &theme, root);
    }
    if state.show_menu {
        menu::render(frame, state, catalog, msgs, &theme, root);
    }
    if let Some(buf) = &state.edit_buffer {
        prompt::render(frame, buf, msgs, &theme, root);
    }
}

fn render_header(
    frame: &mut Frame,
    state: &AppState,
    msgs: Option<&Messages>,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(inner);

    let palette = &state.palette;
    let mut title = Line::from(Span::styled(
        messages::text(msgs, "title"),
        Style::default()
            .fg(theme.colors.accent)
            .add_modifier(Modifier::BOLD),
    ));
    if let (Some(first), Some(last)) = (palette.first_color(), palette.last_color()) {
        title.push_span(Span::styled(
            format!("  {} → {}", first.hex(), last.hex()),
            Style::default().fg(theme.colors.fg_secondary),
        ));
    }
    frame.render_widget(Paragraph::new(title), cols[0]);

    let count = Line::from(vec![
        Span::styled(
            format!("{}: ", messages::text(msgs, "colors")),
            Style::default().fg(theme.colors.fg_secondary),
        ),
        Span::styled(
            format!("{}/{}", palette.color_count(), crate::palette::MAX_COLORS),
            Style::default().fg(theme.colors.fg_primary),
        ),
    ]);
    frame.render_widget(Paragraph::new(count).alignment(Alignment::Right), cols[1]);
}

fn render_footer(
    frame: &mut Frame,
    state: &AppState,
    msgs: Option<&Messages>,
    theme: &Theme,
    area: Rect,
) {
    if let Some(toast) = &state.toast {
        let color = match toast.kind {
            ToastKind::Success => theme.colors.success,
            ToastKind::Error => theme.colors.error,
        };
        let line = Line::from(Span::styled(
            format!(" {}", toast.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let palette = &state.palette;
    let hint = |key: &str, label_key: &str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(theme.colors.fg_primary)
        } else {
            Style::default()
                .fg(theme.colors.fg_secondary)
                .add_modifier(Modifier::CROSSED_OUT)
        };
        vec![
            Span::styled(
                format!(" {key} "),
                Style::default()
                    .fg(theme.colors.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(messages::text(msgs, label_key).to_string(), style),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(hint("+", "add_color", palette.can_add_color()));
    spans.extend(hint("-", "remove_color", palette.can_remove_color()));
    spans.extend(hint("space", "shuffle", true));
    spans.extend(hint("enter", "edit_color", true));
    spans.extend(hint("m", "menu", true));
    spans.extend(hint("?", "help", true));
    spans.extend(hint("q", "quit", true));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Toast;
    use crate::palette::Palette;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| render(f, MessageCatalog::builtin(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn seeded_state() -> AppState {
        let mut palette = Palette::new(5);
        palette.seed_defaults("#000000", "#FFFFFF").unwrap();
        AppState::new(palette)
    }

    #[test]
    fn test_renders_title_count_and_hexes() {
        let text = screen_text(&seeded_state());
        assert!(text.contains("Palette Generator"));
        assert!(text.contains("5/12"));
        assert!(text.contains("#000000"));
        assert!(text.contains("#808080"));
        assert!(text.contains("#FFFFFF"));
    }

    #[test]
    fn test_renders_in_selected_language() {
        let mut state = seeded_state();
        state.options.language = "de".to_string();
        let text = screen_text(&state);
        assert!(text.contains("Palettengenerator"));
    }

    #[test]
    fn test_renders_overlays_and_toast() {
        let mut state = seeded_state();
        state.toggle_menu();
        state.toast = Some(Toast::error("boom"));
        let text = screen_text(&state);
        assert!(text.contains("Color mode"));
        assert!(text.contains("boom"));

        let mut state = seeded_state();
        state.edit_buffer = Some("#12".to_string());
        assert!(screen_text(&state).contains("#12"));

        let mut state = seeded_state();
        assert!(!screen_text(&state).contains("First / last color"));
        state.show_help = true;
        assert!(screen_text(&state).contains("First / last color"));
    }
}
