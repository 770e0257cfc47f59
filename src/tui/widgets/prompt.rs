//! Hex input prompt for editing the selected swatch

use crate::color::Color;
use crate::messages::{self, Messages};
use crate::tui::centered_rect;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color as TermColor, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(frame: &mut Frame, buffer: &str, msgs: Option<&Messages>, theme: &Theme, area: Rect) {
    let popup = centered_rect(32, 3, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.overlay_border_set())
        .border_style(Style::default().fg(theme.colors.accent))
        .style(Style::default().bg(theme.colors.bg))
        .title(format!(" {} ", messages::text(msgs, "enter_hex")))
        .title_style(Style::default().fg(theme.colors.accent));

    // Live preview once the input parses.
    let preview = match Color::from_hex(buffer) {
        Ok(c) => {
            let [r, g, b] = c.rgb();
            Span::styled("    ", Style::default().bg(TermColor::Rgb(r, g, b)))
        }
        Err(_) => Span::raw("    "),
    };

    let line = Line::from(vec![
        Span::styled(buffer.to_string(), Style::default().fg(theme.colors.fg_primary)),
        Span::styled("▏", Style::default().fg(theme.colors.accent)),
        Span::raw(" "),
        preview,
    ]);

    frame.render_widget(Paragraph::new(line).block(block), popup);
}
