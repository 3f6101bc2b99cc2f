//! Action vocabulary for the page.
//!
//! Raw `KeyEvent`s are translated into `PageAction`s by the input router so
//! the core only ever applies semantic actions.

use crate::data::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All possible page actions
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    // Page content
    ToggleCard(usize),
    ToggleTip,
    SubmitPractice,
    ActivateFocused, // Enter/Space on the focused element

    // Focus
    FocusNext,
    FocusPrevious,
    FocusOn(Focus),

    // Scrolling
    ScrollBy(i32),
    ScrollPages(i32),
    ScrollToTop,
    ScrollToBottom,

    // Practice input editing
    EditPractice(KeyEvent),
    SelectAll, // Ctrl+A
    Copy,      // Ctrl+C
    Cut,       // Ctrl+X
    Paste,     // Ctrl+V

    Quit,

    // No action (key not bound or not applicable in this context)
    None,
}

/// Context for action resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionContext {
    Page,      // Cards, buttons and scrolling
    TextInput, // Practice input has focus
}

impl ActionContext {
    pub fn for_focus(focus: Focus) -> Self {
        if focus.is_text_input() {
            ActionContext::TextInput
        } else {
            ActionContext::Page
        }
    }
}

/// Convert KeyEvent to a readable string ("Ctrl+s", "Shift+Up") for logging
pub fn key_event_to_string(key: KeyEvent) -> String {
    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            // BackTab is usually Shift+Tab, so remove Shift from parts if present
            parts.retain(|p| *p != "Shift");
            "BackTab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return String::new(),
    };

    parts.push(&key_str);
    parts.join("+")
}
