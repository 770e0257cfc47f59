//! Palette swatches, one column per color

use crate::app::state::AppState;
use crate::tui::theme::{Theme, contrast_fg};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    if state.palette.is_empty() {
        let empty = Paragraph::new("—")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.colors.fg_secondary));
        frame.render_widget(empty, area);
        return;
    }

    let colors = state.palette.colors();
    let n = colors.len() as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(colors.iter().map(|_| Constraint::Ratio(1, n)))
        .split(area);

    for (swatch, col) in colors.iter().zip(cols.iter()) {
        let [r, g, b] = swatch.rgb();
        let fg = contrast_fg(swatch.rgb());
        let selected = swatch.id == state.selected;

        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(r, g, b))),
            *col,
        );

        let label_style = if selected {
            Style::default().fg(fg).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(fg)
        };
        let mut lines = vec![Line::styled(swatch.hex().to_string(), label_style)];
        if selected {
            lines.push(Line::styled("▲", Style::default().fg(fg)));
        }

        let mid = col.y + col.height.saturating_sub(lines.len() as u16) / 2;
        let label_area = Rect::new(col.x, mid, col.width, (lines.len() as u16).min(col.height));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), label_area);
    }
}
