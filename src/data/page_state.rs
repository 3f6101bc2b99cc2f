//! Page state - the only mutable state the guide has
//!
//! Selected topic card, practice text and tip visibility. Created on
//! startup, mutated by user interaction only, dropped on exit.

use super::content::{
    TopicCard, PRACTICE_EMPTY_MESSAGE, PRACTICE_SUCCESS_MESSAGE, TOPIC_CARDS,
};
use super::Notifier;

/// Result of submitting the practice entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entry accepted, field cleared
    Accepted,
    /// Entry was empty or whitespace, field untouched
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    selected_card: Option<usize>,
    practice_text: String,
    tip_visible: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_card(&self) -> Option<usize> {
        self.selected_card
    }

    /// The card whose long description is currently open
    pub fn selected_topic(&self) -> Option<&'static TopicCard> {
        self.selected_card().and_then(|idx| TOPIC_CARDS.get(idx))
    }

    pub fn is_card_selected(&self, index: usize) -> bool {
        self.selected_card == Some(index)
    }

    /// Toggle a card open/closed. Only one card is open at a time.
    ///
    /// Out-of-range indexes are ignored so `selected_card` always
    /// points at a real card.
    pub fn toggle_card(&mut self, index: usize) {
        if index >= TOPIC_CARDS.len() {
            tracing::debug!("Ignoring toggle for out-of-range card {}", index);
            return;
        }

        self.selected_card = if self.selected_card == Some(index) {
            None
        } else {
            Some(index)
        };
        tracing::debug!(
            "Selected card now {:?}",
            self.selected_topic().map(|card| card.title)
        );
    }

    pub fn tip_visible(&self) -> bool {
        self.tip_visible
    }

    pub fn toggle_tip(&mut self) {
        self.tip_visible = !self.tip_visible;
        tracing::debug!("Tip examples visible: {}", self.tip_visible);
    }

    pub fn practice_text(&self) -> &str {
        &self.practice_text
    }

    /// Replace the practice text verbatim (no trimming on edit)
    pub fn set_practice_text(&mut self, text: impl Into<String>) {
        self.practice_text = text.into();
    }

    /// Submit the practice entry.
    ///
    /// Whitespace-only text counts as empty and is left in place.
    pub fn submit_practice(&mut self, notifier: &mut dyn Notifier) -> SubmitOutcome {
        if self.practice_text.trim().is_empty() {
            notifier.error(PRACTICE_EMPTY_MESSAGE);
            return SubmitOutcome::Empty;
        }

        tracing::info!(
            "Practice entry submitted ({} chars)",
            self.practice_text.chars().count()
        );
        notifier.success(PRACTICE_SUCCESS_MESSAGE);
        self.practice_text.clear();
        SubmitOutcome::Accepted
    }
}
