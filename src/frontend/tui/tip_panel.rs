//! Quick tip panel with its Show/Hide Examples toggle.

use super::primitives::{
    button_width, measure, panel_block, panel_inner_width, render_button, BORDER_ROWS,
};
use crate::data::content::{
    tip_button_label, TopicIcon, TIP_AVOID_EXAMPLE, TIP_AVOID_LABEL, TIP_GOOD_EXAMPLE,
    TIP_GOOD_LABEL, TIP_HEADING, TIP_TEXT,
};
use crate::theme::{blend_colors, AppTheme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct TipPanelView {
    pub examples_visible: bool,
    pub button_focused: bool,
}

impl TipPanelView {
    fn intro(theme: &AppTheme) -> Paragraph<'static> {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", TopicIcon::Lightbulb.glyph()),
                    Style::default().fg(theme.tip_heading),
                ),
                Span::styled(
                    TIP_HEADING,
                    Style::default()
                        .fg(theme.tip_heading)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(TIP_TEXT, Style::default().fg(theme.tip_text))),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true })
    }

    fn examples(theme: &AppTheme) -> Paragraph<'static> {
        let example_line = |icon: TopicIcon, label: &'static str, text: &'static str, color: Color| {
            Line::from(vec![
                Span::styled(format!("{} ", icon.glyph()), Style::default().fg(color)),
                Span::styled(
                    label,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(text, Style::default().fg(theme.text_primary)),
            ])
        };

        Paragraph::new(vec![
            example_line(
                TopicIcon::CheckCircle,
                TIP_GOOD_LABEL,
                TIP_GOOD_EXAMPLE,
                theme.good_label,
            ),
            example_line(
                TopicIcon::AlertCircle,
                TIP_AVOID_LABEL,
                TIP_AVOID_EXAMPLE,
                theme.avoid_label,
            ),
        ])
        .wrap(Wrap { trim: true })
    }

    pub fn height(&self, width: u16, theme: &AppTheme) -> u16 {
        let inner = panel_inner_width(width);
        // intro, blank, button
        let mut height = BORDER_ROWS + measure(&Self::intro(theme), inner) + 2;
        if self.examples_visible {
            height += 1 + measure(&Self::examples(theme), inner);
        }
        height
    }

    fn block(theme: &AppTheme) -> ratatui::widgets::Block<'static> {
        panel_block(
            theme.tip_border,
            blend_colors(theme.background, theme.tip_border, 0.08),
        )
    }

    /// Where the toggle button sits inside a panel drawn at `area`
    pub fn button_rect(&self, area: Rect, theme: &AppTheme) -> Rect {
        let inner = Self::block(theme).inner(area);
        let intro_height = measure(&Self::intro(theme), inner.width);
        let label = tip_button_label(self.examples_visible);
        Rect::new(
            inner.x,
            inner.y + intro_height + 1,
            button_width(label).min(inner.width),
            1,
        )
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        let block = Self::block(theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let intro = Self::intro(theme);
        let intro_height = measure(&intro, inner.width);
        intro.render(
            Rect::new(inner.x, inner.y, inner.width, intro_height.min(inner.height)),
            buf,
        );

        let button = self.button_rect(area, theme);
        if button.y < inner.bottom() {
            render_button(
                tip_button_label(self.examples_visible),
                self.button_focused,
                button,
                buf,
                theme,
            );
        }

        if self.examples_visible {
            let y = button.y + 2;
            if y < inner.bottom() {
                Self::examples(theme).render(
                    Rect::new(inner.x, y, inner.width, inner.bottom() - y),
                    buf,
                );
            }
        }
    }
}
