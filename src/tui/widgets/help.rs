//! Help overlay showing keybindings

use crate::messages::{self, Messages};
use crate::tui::centered_rect;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, msgs: Option<&Messages>, theme: &Theme, area: Rect) {
    let popup = centered_rect(48, 14, area);
    frame.render_widget(Clear, popup);

    let t = |key: &'static str| messages::text(msgs, key);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.overlay_border_set())
        .border_style(Style::default().fg(theme.colors.accent))
        .style(Style::default().bg(theme.colors.bg))
        .title(format!(" {} ", t("help")))
        .title_style(Style::default().fg(theme.colors.accent));

    let content = vec![
        keybind("h / l", t("select"), theme),
        keybind("g / G", t("select_ends"), theme),
        keybind("+ / a", t("add_color"), theme),
        keybind("- / x", t("remove_color"), theme),
        keybind("space / s", t("shuffle"), theme),
        keybind("enter / e", t("edit_color"), theme),
        keybind("m / tab", t("menu"), theme),
        keybind("?", t("help"), theme),
        keybind("q", t("quit"), theme),
    ];

    let para = Paragraph::new(content).block(block).wrap(Wrap { trim: false });
    frame.render_widget(para, popup);
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.colors.fg_primary)),
    ])
}
