//! Presentational primitives shared by the page sections: panel container,
//! badge, button and paragraph measurement.

use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

/// Rows used by a bordered block (top + bottom)
pub const BORDER_ROWS: u16 = 2;

/// Columns a padded panel loses to borders and padding
pub const PANEL_SIDE_COLUMNS: u16 = 4;

/// Blank rows between page sections
pub const SECTION_GAP: u16 = 1;

/// Bordered, padded container used for cards and panels
pub fn panel_block<'a>(border: Color, background: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background))
        .padding(Padding::horizontal(1))
}

/// Inner width of a `panel_block` that is `width` columns wide
pub fn panel_inner_width(width: u16) -> u16 {
    width.saturating_sub(PANEL_SIDE_COLUMNS)
}

/// Rows a wrapped paragraph needs at `width`
pub fn measure(paragraph: &Paragraph, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    paragraph.line_count(width).min(u16::MAX as usize) as u16
}

/// Pill-style badge
pub fn badge<'a>(text: &str, theme: &AppTheme) -> Span<'a> {
    Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(theme.badge_text)
            .bg(theme.badge_background),
    )
}

pub fn button_text(label: &str) -> String {
    format!("[ {} ]", label)
}

/// Display width of a button, brackets included
pub fn button_width(label: &str) -> u16 {
    Span::raw(button_text(label)).width() as u16
}

/// Draw a one-row button into `area`
pub fn render_button(label: &str, focused: bool, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
    let style = if focused {
        Style::default()
            .fg(theme.button_focused_text)
            .bg(theme.button_focused_background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.button_text)
            .bg(theme.button_background)
    };
    Paragraph::new(Span::styled(button_text(label), style)).render(area, buf);
}

/// Horizontally center a `width`-wide, one-row rect inside `area` at row `y`
pub fn centered_row(area: Rect, y: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, y, width, 1)
}
