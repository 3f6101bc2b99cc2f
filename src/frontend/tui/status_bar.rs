//! One-row key hint bar along the bottom of the screen.

use crate::data::Focus;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Key hints for the focused element
pub fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::PracticeInput => "Ctrl+S submit · Ctrl+A/C/X/V edit · Tab/Esc leave · Ctrl+Q quit",
        Focus::Card(_) => "Enter toggle · ←/→ cards · 1-4 cards · t tip · i write · ↑/↓ scroll · q quit",
        Focus::TipButton | Focus::SubmitButton => {
            "Enter press · Tab next · 1-4 cards · t tip · i write · ↑/↓ scroll · q quit"
        }
    }
}

pub fn render_status_bar(focus: Focus, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
    let style = Style::default()
        .fg(theme.status_text)
        .bg(theme.status_background);
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", focus.label()),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", style),
        Span::styled(hints(focus), style),
    ]);
    Paragraph::new(line).style(style).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_hints_mention_submit() {
        assert!(hints(Focus::PracticeInput).contains("Ctrl+S"));
        assert!(!hints(Focus::Card(0)).contains("Ctrl+S"));
    }
}
