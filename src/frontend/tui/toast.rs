//! Toast notifications stacked in the top-right corner of the screen.

use super::primitives::{measure, BORDER_ROWS};
use crate::data::content::TopicIcon;
use crate::data::{NotificationCenter, NotificationLevel};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};

const TOAST_MAX_WIDTH: u16 = 44;

fn toast_paragraph(level: NotificationLevel, message: &str, theme: &AppTheme) -> Paragraph<'static> {
    let icon = match level {
        NotificationLevel::Success => TopicIcon::CheckCircle,
        NotificationLevel::Error => TopicIcon::AlertCircle,
    };
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", icon.glyph()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(message.to_string()),
    ]))
    .style(Style::default().fg(theme.toast_text))
    .wrap(Wrap { trim: true })
}

/// Draw every live toast, newest at the bottom of the stack
pub fn render_toasts(center: &NotificationCenter, screen: Rect, buf: &mut Buffer, theme: &AppTheme) {
    if center.is_empty() {
        return;
    }
    let width = TOAST_MAX_WIDTH.min(screen.width.saturating_sub(2));
    if width < 8 {
        return;
    }
    let x = screen.right().saturating_sub(width + 1);
    let mut y = screen.y + 1;

    for notification in center.visible() {
        let paragraph = toast_paragraph(notification.level, &notification.message, theme);
        let height = BORDER_ROWS + measure(&paragraph, width.saturating_sub(4));
        if y + height > screen.bottom() {
            break;
        }

        let background = match notification.level {
            NotificationLevel::Success => theme.toast_success,
            NotificationLevel::Error => theme.toast_error,
        };
        let area = Rect::new(x, y, width, height);
        Clear.render(area, buf);
        paragraph
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.toast_text))
                    .style(Style::default().bg(background))
                    .padding(Padding::horizontal(1)),
            )
            .render(area, buf);

        y += height;
    }
}
