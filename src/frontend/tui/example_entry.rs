//! Static example time entry with its descriptive badges.

use super::primitives::{badge, measure, panel_block, panel_inner_width, BORDER_ROWS};
use crate::data::content::{
    TopicIcon, EXAMPLE_ENTRY, EXAMPLE_HEADING, EXAMPLE_INTRO, EXAMPLE_TAGS,
};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};

/// Columns the entry box loses to its left rule and padding
const ENTRY_INDENT: u16 = 2;

fn intro(theme: &AppTheme) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", TopicIcon::Edit.glyph()),
                Style::default().fg(theme.example_rule),
            ),
            Span::styled(
                EXAMPLE_HEADING,
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            EXAMPLE_INTRO,
            Style::default().fg(theme.text_secondary),
        )),
    ])
    .wrap(Wrap { trim: true })
}

fn entry(theme: &AppTheme) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        EXAMPLE_ENTRY,
        Style::default()
            .fg(theme.example_entry)
            .add_modifier(Modifier::ITALIC),
    ))
    .wrap(Wrap { trim: true })
}

fn badges(theme: &AppTheme) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(EXAMPLE_TAGS.len() * 2);
    for (idx, tag) in EXAMPLE_TAGS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(badge(tag, theme));
    }
    // No trimming: badges keep their leading pad when wrapped
    Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false })
}

pub fn example_height(width: u16, theme: &AppTheme) -> u16 {
    let inner = panel_inner_width(width);
    BORDER_ROWS
        + measure(&intro(theme), inner)
        + 1
        + measure(&entry(theme), inner.saturating_sub(ENTRY_INDENT))
        + 1
        + measure(&badges(theme), inner)
}

pub fn render_example(area: Rect, buf: &mut Buffer, theme: &AppTheme) {
    let block = panel_block(theme.panel_border, theme.background);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut y = inner.y;
    let mut place = |height: u16| -> Option<Rect> {
        if y >= inner.bottom() {
            return None;
        }
        let rect = Rect::new(inner.x, y, inner.width, height.min(inner.bottom() - y));
        y += height + 1;
        Some(rect)
    };

    let intro = intro(theme);
    if let Some(rect) = place(measure(&intro, inner.width)) {
        intro.render(rect, buf);
    }

    let entry_height = measure(&entry(theme), inner.width.saturating_sub(ENTRY_INDENT));
    let entry = entry(theme).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(theme.example_rule))
            .padding(Padding::left(1)),
    );
    if let Some(rect) = place(entry_height) {
        entry.render(rect, buf);
    }

    let badges = badges(theme);
    if let Some(rect) = place(measure(&badges, inner.width)) {
        badges.render(rect, buf);
    }
}
