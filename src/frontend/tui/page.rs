//! Renders the whole page into an offscreen buffer sized to the content,
//! then copies the visible slice onto the terminal frame.

use super::example_entry::render_example;
use super::hero::{render_hero, render_text_section};
use super::layout::PageLayout;
use super::practice_panel::render_practice;
use super::tip_panel::TipPanelView;
use super::topic_card::TopicCardView;
use crate::data::content::{
    ASPECTS_HEADING, ASPECTS_INTRO, BOTTOM_LINE_HEADING, BOTTOM_LINE_TEXT, TOPIC_CARDS,
};
use crate::data::{Focus, PageState};
use crate::theme::AppTheme;
use crate::widgets::PracticeInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
};

/// Draw every section at its layout position.
///
/// `focus` is None when nothing should be highlighted (plain-text export).
pub fn render_page(
    layout: &PageLayout,
    page: &PageState,
    focus: Option<Focus>,
    input: &mut PracticeInput,
    theme: &AppTheme,
) -> Buffer {
    let area = Rect::new(0, 0, layout.width, layout.content_height);
    let mut buf = Buffer::empty(area);
    buf.set_style(area, Style::default().bg(theme.background).fg(theme.text_primary));

    render_hero(layout.hero, &mut buf, theme);
    render_text_section(
        ASPECTS_HEADING,
        ASPECTS_INTRO,
        layout.aspects_heading,
        &mut buf,
        theme,
    );

    for (index, (card, rect)) in TOPIC_CARDS.iter().zip(layout.cards.iter()).enumerate() {
        TopicCardView {
            card,
            index,
            selected: page.is_card_selected(index),
            focused: focus == Some(Focus::Card(index)),
        }
        .render(*rect, &mut buf, theme);
    }

    TipPanelView {
        examples_visible: page.tip_visible(),
        button_focused: focus == Some(Focus::TipButton),
    }
    .render(layout.tip, &mut buf, theme);

    render_example(layout.example, &mut buf, theme);

    render_practice(
        layout.practice,
        &mut buf,
        theme,
        input,
        focus == Some(Focus::PracticeInput),
        focus == Some(Focus::SubmitButton),
    );

    render_text_section(
        BOTTOM_LINE_HEADING,
        BOTTOM_LINE_TEXT,
        layout.bottom_line,
        &mut buf,
        theme,
    );

    buf
}

/// Copy rows `[scroll, scroll + dest.height)` of `page` into `dest`,
/// starting at column `dest.x`
pub fn blit(page: &Buffer, scroll: u16, dest_area: Rect, dest: &mut Buffer) {
    let src = page.area;
    for row in 0..dest_area.height {
        let src_y = scroll.saturating_add(row);
        if src_y >= src.bottom() {
            break;
        }
        for col in 0..src.width.min(dest_area.width) {
            if let (Some(from), Some(to)) = (
                page.cell((col, src_y)),
                dest.cell_mut((dest_area.x + col, dest_area.y + row)),
            ) {
                *to = from.clone();
            }
        }
    }
}

/// Buffer contents as plain text lines with trailing spaces removed
pub fn buffer_to_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut skip = 0usize;
        for x in area.left()..area.right() {
            if skip > 0 {
                // Trailing half of a wide glyph
                skip -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            skip = Span::raw(symbol).width().saturating_sub(1);
            line.push_str(symbol);
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePresets;

    fn page_text(page: &PageState, width: u16) -> String {
        let theme = ThemePresets::dark();
        let layout = PageLayout::compute(width, page, &theme);
        let mut input = PracticeInput::new();
        let buf = render_page(&layout, page, None, &mut input, &theme);
        buffer_to_lines(&buf).join("\n")
    }

    #[test]
    fn test_every_section_rendered() {
        let text = page_text(&PageState::new(), 120);
        for needle in [
            "The Importance of Timekeeping in Legal Practice",
            "Why Timekeeping Matters",
            "Client Trust",
            "Revenue Management",
            "Ethical Compliance",
            "Value Demonstration",
            "Quick Tip",
            "[ Show Examples ]",
            "Example Entry",
            "Practice Your Skills",
            "[ Submit Practice Entry ]",
            "The Bottom Line",
        ] {
            assert!(text.contains(needle), "missing {:?}", needle);
        }
    }

    #[test]
    fn test_only_selected_card_shows_details() {
        let mut page = PageState::new();
        page.toggle_card(0);
        let text = page_text(&page, 120);
        assert!(text.contains("Transparent"));
        assert!(!text.contains("ethics"));

        page.toggle_card(2);
        let text = page_text(&page, 120);
        assert!(!text.contains("Transparent"));
        assert!(text.contains("ethics"));
    }

    #[test]
    fn test_blit_copies_visible_slice() {
        let mut page = Buffer::empty(Rect::new(0, 0, 4, 6));
        for y in 0..6 {
            page.set_string(0, y, format!("r{}", y), Style::default());
        }
        let dest_area = Rect::new(2, 0, 4, 3);
        let mut dest = Buffer::empty(Rect::new(0, 0, 8, 3));
        blit(&page, 2, dest_area, &mut dest);

        let lines = buffer_to_lines(&dest);
        assert_eq!(lines, vec!["  r2", "  r3", "  r4"]);
    }

    #[test]
    fn test_blit_past_end_leaves_rest_untouched() {
        let page = Buffer::empty(Rect::new(0, 0, 4, 2));
        let dest_area = Rect::new(0, 0, 4, 5);
        let mut dest = Buffer::empty(dest_area);
        blit(&page, 1, dest_area, &mut dest);
        assert_eq!(dest, Buffer::empty(dest_area));
    }
}
