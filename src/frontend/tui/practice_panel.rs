//! Practice section: instructions, the multi-line entry box and the submit
//! button.

use super::primitives::{
    button_width, centered_row, measure, panel_block, panel_inner_width, render_button,
    BORDER_ROWS,
};
use crate::data::content::{PRACTICE_HEADING, PRACTICE_INSTRUCTIONS, PRACTICE_SUBMIT_LABEL};
use crate::theme::AppTheme;
use crate::widgets::PracticeInput;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Rows of the entry box, borders included
pub const INPUT_HEIGHT: u16 = 6;

/// Widest the entry box grows
pub const INPUT_MAX_WIDTH: u16 = 72;

fn intro(theme: &AppTheme) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            PRACTICE_HEADING,
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            PRACTICE_INSTRUCTIONS,
            Style::default().fg(theme.text_secondary),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}

pub fn practice_height(width: u16, theme: &AppTheme) -> u16 {
    // intro, blank, input, blank, button
    BORDER_ROWS + measure(&intro(theme), panel_inner_width(width)) + 1 + INPUT_HEIGHT + 1 + 1
}

/// Positions of the entry box and submit button inside a panel at `area`
pub struct PracticeAreas {
    pub intro: Rect,
    pub input: Rect,
    pub submit: Rect,
}

pub fn practice_areas(area: Rect, theme: &AppTheme) -> PracticeAreas {
    let inner = panel_block(theme.panel_border, theme.background).inner(area);
    let intro_height = measure(&intro(theme), inner.width);

    let input_width = inner.width.min(INPUT_MAX_WIDTH);
    let input_y = inner.y + intro_height + 1;
    let input = Rect::new(
        inner.x + (inner.width - input_width) / 2,
        input_y,
        input_width,
        INPUT_HEIGHT,
    );
    let submit = centered_row(
        inner,
        input_y + INPUT_HEIGHT + 1,
        button_width(PRACTICE_SUBMIT_LABEL),
    );

    PracticeAreas {
        intro: Rect::new(inner.x, inner.y, inner.width, intro_height),
        input,
        submit,
    }
}

/// Apply theme and focus styling to the entry box
fn style_input(input: &mut PracticeInput, theme: &AppTheme, focused: bool) {
    let border_color = if focused {
        theme.focus_border
    } else {
        theme.panel_border
    };
    let base = Style::default()
        .fg(theme.input_text)
        .bg(theme.input_background);

    let textarea = input.textarea_mut();
    textarea.set_style(base);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_style(Style::default().fg(theme.input_placeholder));
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(base),
    );
    if focused {
        textarea.set_cursor_style(Style::default().fg(theme.input_background).bg(theme.input_cursor));
    } else {
        // Hide the cursor when the box is not being edited
        textarea.set_cursor_style(base);
    }
}

pub fn render_practice(
    area: Rect,
    buf: &mut Buffer,
    theme: &AppTheme,
    input: &mut PracticeInput,
    input_focused: bool,
    submit_focused: bool,
) {
    let block = panel_block(theme.panel_border, theme.background);
    block.render(area, buf);

    let areas = practice_areas(area, theme);
    let bottom = area.bottom().saturating_sub(1);
    intro(theme).render(areas.intro, buf);

    if areas.input.bottom() <= bottom {
        style_input(input, theme, input_focused);
        input.textarea().render(areas.input, buf);
    }
    if areas.submit.y < bottom {
        render_button(PRACTICE_SUBMIT_LABEL, submit_focused, areas.submit, buf, theme);
    }
}
