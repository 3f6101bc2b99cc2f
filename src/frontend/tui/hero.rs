//! Hero banner and the plain centered text sections (section intro and
//! closing "Bottom Line").

use super::primitives::{badge, measure, panel_block, panel_inner_width, BORDER_ROWS};
use crate::data::content::{TopicIcon, HERO_BADGE, HERO_SUBTITLE, HERO_TITLE};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

fn hero_paragraph(theme: &AppTheme) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", TopicIcon::Clock.glyph()),
            Style::default()
                .fg(theme.hero_title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(theme.hero_title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            HERO_SUBTITLE,
            Style::default().fg(theme.hero_subtitle),
        )),
        Line::from(""),
        Line::from(badge(HERO_BADGE, theme)),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

pub fn hero_height(width: u16, theme: &AppTheme) -> u16 {
    BORDER_ROWS + measure(&hero_paragraph(theme), panel_inner_width(width))
}

pub fn render_hero(area: Rect, buf: &mut Buffer, theme: &AppTheme) {
    let block = panel_block(theme.hero_background, theme.hero_background);
    let inner = block.inner(area);
    block.render(area, buf);
    hero_paragraph(theme).render(inner, buf);
}

/// Centered heading followed by centered body text
fn text_section_paragraph(heading: &str, body: &str, theme: &AppTheme) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            body.to_string(),
            Style::default().fg(theme.text_secondary),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

pub fn text_section_height(heading: &str, body: &str, width: u16, theme: &AppTheme) -> u16 {
    measure(&text_section_paragraph(heading, body, theme), width)
}

pub fn render_text_section(
    heading: &str,
    body: &str,
    area: Rect,
    buf: &mut Buffer,
    theme: &AppTheme,
) {
    text_section_paragraph(heading, body, theme).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePresets;

    #[test]
    fn test_hero_grows_when_narrow() {
        let theme = ThemePresets::dark();
        let wide = hero_height(120, &theme);
        let narrow = hero_height(30, &theme);
        // icon, blank, title, blank, subtitle, blank, badge + borders
        assert_eq!(wide, 9);
        assert!(narrow > wide);
    }

    #[test]
    fn test_hero_renders_title() {
        let theme = ThemePresets::dark();
        let area = Rect::new(0, 0, 120, hero_height(120, &theme));
        let mut buf = Buffer::empty(area);
        render_hero(area, &mut buf, &theme);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 3)].symbol().to_string())
            .collect();
        assert!(row.contains(HERO_TITLE), "row was: {}", row);
    }
}
