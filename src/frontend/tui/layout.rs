//! Page geometry: where every section sits in page coordinates (row 0 is the
//! top of the hero, independent of scrolling) plus hit testing for clicks.

use super::example_entry::example_height;
use super::hero::{hero_height, text_section_height};
use super::practice_panel::{practice_areas, practice_height};
use super::primitives::SECTION_GAP;
use super::tip_panel::TipPanelView;
use super::topic_card::TopicCardView;
use crate::data::content::{
    ASPECTS_HEADING, ASPECTS_INTRO, BOTTOM_LINE_HEADING, BOTTOM_LINE_TEXT, TOPIC_CARDS,
};
use crate::data::{Focus, PageState};
use crate::theme::AppTheme;
use ratatui::layout::{Position, Rect};

/// Content width at which cards sit four across
pub const FOUR_COLUMN_WIDTH: u16 = 100;

/// Content width at which cards sit two across
pub const TWO_COLUMN_WIDTH: u16 = 56;

/// Columns between cards in the same row
const CARD_GAP: u16 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: u16,
    pub content_height: u16,
    pub hero: Rect,
    pub aspects_heading: Rect,
    pub cards: Vec<Rect>,
    pub tip: Rect,
    pub tip_button: Rect,
    pub example: Rect,
    pub practice: Rect,
    pub practice_input: Rect,
    pub submit_button: Rect,
    pub bottom_line: Rect,
}

/// Number of card columns for a content width
pub fn card_columns(width: u16) -> usize {
    if width >= FOUR_COLUMN_WIDTH {
        4
    } else if width >= TWO_COLUMN_WIDTH {
        2
    } else {
        1
    }
}

/// Center the page horizontally: returns (x offset, content width)
pub fn content_columns(screen_width: u16, max_content_width: u16) -> (u16, u16) {
    let width = screen_width.min(max_content_width.max(1));
    ((screen_width - width) / 2, width)
}

impl PageLayout {
    pub fn compute(width: u16, page: &PageState, theme: &AppTheme) -> Self {
        let mut y = 0u16;
        let mut next = |height: u16| -> Rect {
            let rect = Rect::new(0, y, width, height);
            y = y.saturating_add(height).saturating_add(SECTION_GAP);
            rect
        };

        let hero = next(hero_height(width, theme));
        let aspects_heading = next(text_section_height(
            ASPECTS_HEADING,
            ASPECTS_INTRO,
            width,
            theme,
        ));

        // Card grid
        let columns = card_columns(width);
        let gaps = CARD_GAP * (columns as u16 - 1);
        let card_width = width.saturating_sub(gaps) / columns as u16;
        let mut cards = Vec::with_capacity(TOPIC_CARDS.len());
        for (row_idx, row) in TOPIC_CARDS.chunks(columns).enumerate() {
            let row_height = row
                .iter()
                .enumerate()
                .map(|(col, card)| {
                    let index = row_idx * columns + col;
                    TopicCardView {
                        card,
                        index,
                        selected: page.is_card_selected(index),
                        focused: false,
                    }
                    .height(card_width, theme)
                })
                .max()
                .unwrap_or(0);
            let row_rect = next(row_height);
            for col in 0..row.len() {
                let x = col as u16 * (card_width + CARD_GAP);
                // Last column absorbs the rounding remainder
                let w = if col + 1 == columns {
                    width - x
                } else {
                    card_width
                };
                cards.push(Rect::new(x, row_rect.y, w, row_height));
            }
        }

        let tip_view = TipPanelView {
            examples_visible: page.tip_visible(),
            button_focused: false,
        };
        let tip = next(tip_view.height(width, theme));
        let tip_button = tip_view.button_rect(tip, theme);

        let example = next(example_height(width, theme));

        let practice = next(practice_height(width, theme));
        let areas = practice_areas(practice, theme);

        let bottom_line = next(text_section_height(
            BOTTOM_LINE_HEADING,
            BOTTOM_LINE_TEXT,
            width,
            theme,
        ));

        Self {
            width,
            content_height: bottom_line.bottom(),
            hero,
            aspects_heading,
            cards,
            tip,
            tip_button,
            example,
            practice,
            practice_input: areas.input,
            submit_button: areas.submit,
            bottom_line,
        }
    }

    /// Rect of a focusable element
    pub fn rect_for(&self, focus: Focus) -> Rect {
        match focus {
            Focus::Card(idx) => self.cards.get(idx).copied().unwrap_or_default(),
            Focus::TipButton => self.tip_button,
            Focus::PracticeInput => self.practice_input,
            Focus::SubmitButton => self.submit_button,
        }
    }

    /// Which element (if any) sits at page position (x, y)
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Focus> {
        let pos = Position::new(x, y);
        Focus::order()
            .into_iter()
            .find(|focus| self.rect_for(*focus).contains(pos))
    }

    /// Scroll offset that brings `focus` fully into a viewport of `height`
    /// rows, moving as little as possible
    pub fn scroll_to_show(&self, focus: Focus, scroll: u16, height: u16) -> u16 {
        let rect = self.rect_for(focus);
        if rect.y < scroll {
            rect.y
        } else if rect.bottom() > scroll.saturating_add(height) {
            // Tall elements align their top edge
            rect.bottom().saturating_sub(height).min(rect.y)
        } else {
            scroll
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePresets;

    fn layout(width: u16, page: &PageState) -> PageLayout {
        PageLayout::compute(width, page, &ThemePresets::dark())
    }

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(120), 4);
        assert_eq!(card_columns(80), 2);
        assert_eq!(card_columns(40), 1);
    }

    #[test]
    fn test_content_columns_centers() {
        assert_eq!(content_columns(200, 120), (40, 120));
        assert_eq!(content_columns(80, 120), (0, 80));
    }

    #[test]
    fn test_sections_do_not_overlap() {
        for width in [40, 80, 120] {
            let l = layout(width, &PageState::new());
            let order = [
                l.hero,
                l.aspects_heading,
                l.cards[l.cards.len() - 1],
                l.tip,
                l.example,
                l.practice,
                l.bottom_line,
            ];
            for pair in order.windows(2) {
                assert!(pair[0].bottom() < pair[1].y, "width {}: {:?}", width, pair);
            }
            assert_eq!(l.content_height, l.bottom_line.bottom());
            assert_eq!(l.cards.len(), 4);
        }
    }

    #[test]
    fn test_four_across_share_a_row() {
        let l = layout(120, &PageState::new());
        assert!(l.cards.iter().all(|c| c.y == l.cards[0].y));
        assert_eq!(l.cards[3].right(), 120);
    }

    #[test]
    fn test_two_by_two_grid() {
        let l = layout(80, &PageState::new());
        assert_eq!(l.cards[0].y, l.cards[1].y);
        assert_eq!(l.cards[2].y, l.cards[3].y);
        assert!(l.cards[2].y > l.cards[0].y);
    }

    #[test]
    fn test_selected_card_grows_its_row() {
        let closed = layout(120, &PageState::new());
        let mut page = PageState::new();
        page.toggle_card(2);
        let open = layout(120, &page);

        assert!(open.cards[0].height > closed.cards[0].height);
        assert!(open.tip.y > closed.tip.y);
    }

    #[test]
    fn test_tip_examples_push_page_down() {
        let mut page = PageState::new();
        let hidden = layout(100, &page);
        page.toggle_tip();
        let shown = layout(100, &page);
        assert_eq!(shown.tip.height, hidden.tip.height + 3);
        assert_eq!(shown.content_height, hidden.content_height + 3);
    }

    #[test]
    fn test_hit_test_finds_elements() {
        let l = layout(120, &PageState::new());
        for focus in Focus::order() {
            let rect = l.rect_for(focus);
            assert_eq!(l.hit_test(rect.x, rect.y), Some(focus), "{:?}", focus);
        }
        assert_eq!(l.hit_test(0, 0), None); // hero
    }

    #[test]
    fn test_scroll_to_show() {
        let l = layout(120, &PageState::new());
        let submit = l.submit_button;

        let scroll = l.scroll_to_show(Focus::SubmitButton, 0, 10);
        assert_eq!(scroll, submit.bottom() - 10);

        // Already visible: unchanged
        assert_eq!(l.scroll_to_show(Focus::SubmitButton, submit.y, 10), submit.y);

        // Above the viewport: snap to top edge
        assert_eq!(l.scroll_to_show(Focus::Card(0), 100, 10), l.cards[0].y);
    }
}
