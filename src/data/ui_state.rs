//! UI State - Focus and scroll state
//!
//! This module contains UI state that is independent of rendering.
//! The TUI frontend reads from these structures.

use super::content::TOPIC_CARDS;

/// Element that currently receives keyboard activation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// Topic card by index
    Card(usize),
    /// "Show Examples" / "Hide Examples" button
    TipButton,
    /// Multi-line practice input
    PracticeInput,
    /// "Submit Practice Entry" button
    SubmitButton,
}

impl Focus {
    /// Tab order, top of the page to the bottom
    pub fn order() -> Vec<Focus> {
        let mut order: Vec<Focus> = (0..TOPIC_CARDS.len()).map(Focus::Card).collect();
        order.push(Focus::TipButton);
        order.push(Focus::PracticeInput);
        order.push(Focus::SubmitButton);
        order
    }

    fn position(&self) -> usize {
        Self::order().iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next element in tab order (wraps around)
    pub fn next(&self) -> Focus {
        let order = Self::order();
        order[(self.position() + 1) % order.len()]
    }

    /// Previous element in tab order (wraps around)
    pub fn previous(&self) -> Focus {
        let order = Self::order();
        let pos = self.position();
        if pos == 0 {
            order[order.len() - 1]
        } else {
            order[pos - 1]
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Focus::PracticeInput)
    }

    /// Short description for the status bar
    pub fn label(&self) -> String {
        match self {
            Focus::Card(idx) => TOPIC_CARDS
                .get(*idx)
                .map(|c| c.title.to_string())
                .unwrap_or_default(),
            Focus::TipButton => "Quick Tip".to_string(),
            Focus::PracticeInput => "Practice entry".to_string(),
            Focus::SubmitButton => "Submit".to_string(),
        }
    }
}

/// Application UI state
#[derive(Clone, Debug)]
pub struct UiState {
    /// Focused element
    pub focus: Focus,

    /// Rows scrolled off the top of the page
    pub scroll: u16,

    /// Set when focus moved and the frontend should bring it into view
    pub scroll_to_focus: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Card(0),
            scroll: 0,
            scroll_to_focus: false,
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::debug!("Focus {:?} -> {:?}", self.focus, focus);
        }
        self.focus = focus;
        self.scroll_to_focus = true;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).max(0);
        self.scroll = next.min(u16::MAX as i32) as u16;
    }

    /// Keep scroll inside `[0, content_height - viewport_height]`
    pub fn clamp_scroll(&mut self, content_height: u16, viewport_height: u16) {
        let max = content_height.saturating_sub(viewport_height);
        if self.scroll > max {
            self.scroll = max;
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_wraps() {
        let mut focus = Focus::Card(0);
        let order = Focus::order();
        for expected in order.iter().skip(1) {
            focus = focus.next();
            assert_eq!(focus, *expected);
        }
        assert_eq!(focus.next(), Focus::Card(0));
        assert_eq!(Focus::Card(0).previous(), Focus::SubmitButton);
    }

    #[test]
    fn test_previous_inverts_next() {
        for focus in Focus::order() {
            assert_eq!(focus.next().previous(), focus);
        }
    }

    #[test]
    fn test_scroll_clamping() {
        let mut ui = UiState::new();
        ui.scroll_by(-5);
        assert_eq!(ui.scroll, 0);

        ui.scroll_by(50);
        ui.clamp_scroll(60, 20);
        assert_eq!(ui.scroll, 40);

        ui.clamp_scroll(10, 20);
        assert_eq!(ui.scroll, 0);
    }
}
