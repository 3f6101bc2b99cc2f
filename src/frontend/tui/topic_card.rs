//! Topic card: icon, title and short description, plus the long
//! description when the card is the selected one.

use super::primitives::{measure, panel_inner_width, BORDER_ROWS};
use crate::data::content::TopicCard;
use crate::theme::{blend_colors, parse_hex_color, AppTheme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};

pub struct TopicCardView<'a> {
    pub card: &'a TopicCard,
    /// Zero-based position, shown as the 1-4 shortcut in the border
    pub index: usize,
    pub selected: bool,
    pub focused: bool,
}

impl<'a> TopicCardView<'a> {
    fn accent(&self, theme: &AppTheme) -> Color {
        parse_hex_color(self.card.accent_color).unwrap_or(theme.card_border)
    }

    fn header(&self, theme: &AppTheme) -> Paragraph<'static> {
        let accent = self.accent(theme);
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", self.card.icon.glyph()),
                Style::default()
                    .fg(Color::White)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.card.title,
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.card.short_description,
                Style::default().fg(theme.text_secondary),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    fn details(&self, theme: &AppTheme) -> Paragraph<'static> {
        Paragraph::new(Span::styled(
            self.card.long_description,
            Style::default().fg(theme.text_primary),
        ))
        .wrap(Wrap { trim: true })
    }

    /// Detail box background: a faint wash of the accent color
    fn details_background(&self, theme: &AppTheme) -> Color {
        blend_colors(theme.background, self.accent(theme), 0.15)
    }

    /// Rows this card needs at `width` (its own row may be taller)
    pub fn height(&self, width: u16, theme: &AppTheme) -> u16 {
        let inner = panel_inner_width(width);
        let mut height = BORDER_ROWS + measure(&self.header(theme), inner);
        if self.selected {
            // blank row + detail text with one column of padding each side
            height += 1 + measure(&self.details(theme), inner.saturating_sub(2));
        }
        height
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        let accent = self.accent(theme);
        let border_color = if self.focused {
            theme.focus_border
        } else if self.selected {
            accent
        } else {
            theme.card_border
        };
        let border_type = if self.selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ", self.index + 1),
                Style::default().fg(border_color),
            ))
            .style(Style::default().bg(theme.background))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let header = self.header(theme);
        let header_height = measure(&header, inner.width).min(inner.height);
        header.render(
            Rect::new(inner.x, inner.y, inner.width, header_height),
            buf,
        );

        if !self.selected {
            return;
        }

        let detail_y = inner.y + header_height + 1;
        let detail_bottom = inner.y + inner.height;
        if detail_y >= detail_bottom {
            return;
        }
        let detail_area = Rect::new(inner.x, detail_y, inner.width, detail_bottom - detail_y);
        self.details(theme)
            .block(
                Block::default()
                    .style(Style::default().bg(self.details_background(theme)))
                    .padding(Padding::horizontal(1)),
            )
            .render(detail_area, buf);
    }
}
