//! Input routing for the page
//!
//! Routes keyboard input to a PageAction based on which element has focus.
//! While the practice input is focused almost every key is text; elsewhere
//! single letters are shortcuts.

use crate::core::page_actions::{key_event_to_string, ActionContext, PageAction};
use crate::data::content::TOPIC_CARDS;
use crate::data::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route a key event to a PageAction based on current focus
pub fn route_input(key: KeyEvent, focus: Focus) -> PageAction {
    let action = match ActionContext::for_focus(focus) {
        ActionContext::TextInput => route_text_input(key),
        ActionContext::Page => route_page(key, focus),
    };

    if action == PageAction::None {
        tracing::debug!("Unbound key: {}", key_event_to_string(key));
    }
    action
}

fn route_text_input(key: KeyEvent) -> PageAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') if ctrl => PageAction::Quit,
        KeyCode::Char('s') if ctrl => PageAction::SubmitPractice,
        KeyCode::Char('a') if ctrl => PageAction::SelectAll,
        KeyCode::Char('c') if ctrl => PageAction::Copy,
        KeyCode::Char('x') if ctrl => PageAction::Cut,
        KeyCode::Char('v') if ctrl => PageAction::Paste,
        KeyCode::Tab => PageAction::FocusNext,
        KeyCode::BackTab => PageAction::FocusPrevious,
        KeyCode::Esc => PageAction::FocusOn(Focus::SubmitButton),
        _ => PageAction::EditPractice(key),
    }
}

fn route_page(key: KeyEvent, focus: Focus) -> PageAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => PageAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => PageAction::Quit,

        KeyCode::Tab => PageAction::FocusNext,
        KeyCode::BackTab => PageAction::FocusPrevious,
        KeyCode::Enter | KeyCode::Char(' ') => PageAction::ActivateFocused,

        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < TOPIC_CARDS.len() {
                PageAction::ToggleCard(index)
            } else {
                PageAction::None
            }
        }
        KeyCode::Char('t') => PageAction::ToggleTip,
        KeyCode::Char('i') | KeyCode::Char('e') => PageAction::FocusOn(Focus::PracticeInput),

        KeyCode::Left => match focus {
            Focus::Card(idx) if idx > 0 => PageAction::FocusOn(Focus::Card(idx - 1)),
            _ => PageAction::None,
        },
        KeyCode::Right => match focus {
            Focus::Card(idx) if idx + 1 < TOPIC_CARDS.len() => {
                PageAction::FocusOn(Focus::Card(idx + 1))
            }
            _ => PageAction::None,
        },

        KeyCode::Up | KeyCode::Char('k') => PageAction::ScrollBy(-1),
        KeyCode::Down | KeyCode::Char('j') => PageAction::ScrollBy(1),
        KeyCode::PageUp => PageAction::ScrollPages(-1),
        KeyCode::PageDown => PageAction::ScrollPages(1),
        KeyCode::Home => PageAction::ScrollToTop,
        KeyCode::End => PageAction::ScrollToBottom,

        _ => PageAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_number_keys_toggle_cards() {
        assert_eq!(
            route_input(key(KeyCode::Char('1')), Focus::TipButton),
            PageAction::ToggleCard(0)
        );
        assert_eq!(
            route_input(key(KeyCode::Char('4')), Focus::Card(0)),
            PageAction::ToggleCard(3)
        );
        assert_eq!(
            route_input(key(KeyCode::Char('5')), Focus::Card(0)),
            PageAction::None
        );
    }

    #[test]
    fn test_letters_are_text_in_practice_input() {
        for c in ['q', 't', '1', ' ', 'i'] {
            let k = key(KeyCode::Char(c));
            assert_eq!(
                route_input(k, Focus::PracticeInput),
                PageAction::EditPractice(k)
            );
        }
        let enter = key(KeyCode::Enter);
        assert_eq!(
            route_input(enter, Focus::PracticeInput),
            PageAction::EditPractice(enter)
        );
    }

    #[test]
    fn test_practice_shortcuts() {
        assert_eq!(route_input(ctrl('s'), Focus::PracticeInput), PageAction::SubmitPractice);
        assert_eq!(route_input(ctrl('a'), Focus::PracticeInput), PageAction::SelectAll);
        assert_eq!(route_input(ctrl('c'), Focus::PracticeInput), PageAction::Copy);
        assert_eq!(route_input(ctrl('x'), Focus::PracticeInput), PageAction::Cut);
        assert_eq!(route_input(ctrl('v'), Focus::PracticeInput), PageAction::Paste);
        assert_eq!(route_input(ctrl('q'), Focus::PracticeInput), PageAction::Quit);
        assert_eq!(
            route_input(key(KeyCode::Esc), Focus::PracticeInput),
            PageAction::FocusOn(Focus::SubmitButton)
        );
    }

    #[test]
    fn test_page_navigation() {
        assert_eq!(route_input(key(KeyCode::Tab), Focus::Card(0)), PageAction::FocusNext);
        assert_eq!(
            route_input(key(KeyCode::Enter), Focus::SubmitButton),
            PageAction::ActivateFocused
        );
        assert_eq!(
            route_input(key(KeyCode::Right), Focus::Card(1)),
            PageAction::FocusOn(Focus::Card(2))
        );
        assert_eq!(route_input(key(KeyCode::Right), Focus::Card(3)), PageAction::None);
        assert_eq!(route_input(key(KeyCode::Left), Focus::Card(0)), PageAction::None);
        assert_eq!(route_input(key(KeyCode::Char('q')), Focus::Card(0)), PageAction::Quit);
    }
}
