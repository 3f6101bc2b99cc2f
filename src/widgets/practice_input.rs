//! Editing buffer behind the practice entry box.
//!
//! Wraps a multi-line `TextArea` and exposes its content as one string with
//! `\n` line breaks, exactly as typed.

use super::text_editable::TextEditable;
use crate::data::content::PRACTICE_PLACEHOLDER;
use crossterm::event::KeyEvent;
use tui_textarea::TextArea;

pub struct PracticeInput {
    textarea: TextArea<'static>,
}

impl PracticeInput {
    pub fn new() -> Self {
        Self {
            textarea: Self::fresh_textarea(),
        }
    }

    fn fresh_textarea() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PRACTICE_PLACEHOLDER);
        textarea
    }

    /// Current content, lines joined with '\n'
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    /// Feed a key to the text area. Returns true if the content changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        self.textarea.insert_str(text)
    }

    /// Drop all content and undo history
    pub fn clear(&mut self) {
        self.textarea = Self::fresh_textarea();
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }
}

impl Default for PracticeInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditable for PracticeInput {
    fn get_focused_field_mut(&mut self) -> Option<&mut TextArea<'static>> {
        Some(&mut self.textarea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_is_verbatim() {
        let mut input = PracticeInput::new();
        for c in "  Call A. Underhill ".chars() {
            assert!(input.input(key(KeyCode::Char(c))));
        }
        assert_eq!(input.text(), "  Call A. Underhill ");
    }

    #[test]
    fn test_enter_inserts_newline() {
        let mut input = PracticeInput::new();
        input.insert_str("Review lease");
        input.input(key(KeyCode::Enter));
        input.insert_str("Draft notes");
        assert_eq!(input.text(), "Review lease\nDraft notes");
    }

    #[test]
    fn test_backspace_edits() {
        let mut input = PracticeInput::new();
        input.insert_str("Reviewed");
        input.input(key(KeyCode::Backspace));
        input.input(key(KeyCode::Backspace));
        assert_eq!(input.text(), "Review");
    }

    #[test]
    fn test_clear_empties() {
        let mut input = PracticeInput::new();
        input.insert_str("Draft memo");
        assert!(!input.is_empty());
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_selected_text_requires_selection() {
        let mut input = PracticeInput::new();
        assert_eq!(input.selected_text(), None);

        input.insert_str("Review lease");
        input.select_all();
        assert_eq!(input.selected_text().as_deref(), Some("Review lease"));
    }

    #[test]
    fn test_old_cut_not_copied_without_selection() {
        let mut input = PracticeInput::new();
        input.insert_str("Reviewed contract");
        input.select_all();
        assert_eq!(input.cut_selection().as_deref(), Some("Reviewed contract"));
        assert!(input.is_empty());

        // The cut text is still in the yank buffer, but nothing is selected
        input.insert_str("Review contract");
        assert_eq!(input.selected_text(), None);
        assert_eq!(input.cut_selection(), None);
        assert_eq!(input.text(), "Review contract");
    }

    #[test]
    fn test_select_all_then_type_replaces() {
        let mut input = PracticeInput::new();
        input.insert_str("Reviewed contract");
        input.select_all();
        input.input(key(KeyCode::Char('R')));
        assert_eq!(input.text(), "R");
    }
}
