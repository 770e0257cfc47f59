//! Options menu overlay

use crate::app::state::{AppState, MenuItem};
use crate::messages::{self, MessageCatalog, Messages};
use crate::tui::centered_rect;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

pub fn render(
    frame: &mut Frame,
    state: &AppState,
    catalog: &MessageCatalog,
    msgs: Option<&Messages>,
    theme: &Theme,
    area: Rect,
) {
    let popup = centered_rect(44, 6, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.overlay_border_set())
        .border_style(Style::default().fg(theme.colors.accent))
        .style(Style::default().bg(theme.colors.bg))
        .title(format!(" {} ", messages::text(msgs, "menu")))
        .title_style(Style::default().fg(theme.colors.accent));

    let options = &state.options;
    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| {
            let value = match item {
                MenuItem::ColorMode => {
                    let key = if options.dark_mode() { "dark" } else { "light" };
                    messages::text(msgs, key).to_string()
                }
                MenuItem::Language => {
                    let known = messages::get_messages(catalog, &options.language).is_some();
                    if known {
                        options.language.clone()
                    } else {
                        format!("{} (?)", options.language)
                    }
                }
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:14}", messages::text(msgs, item.label_key())),
                    Style::default().fg(theme.colors.fg_secondary),
                ),
                Span::styled(value, Style::default().fg(theme.colors.fg_primary)),
            ]))
        })
        .collect();

    let selected = MenuItem::ALL
        .iter()
        .position(|i| *i == state.menu_selected)
        .unwrap_or(0);
    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▸ ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, popup, &mut list_state);
}
