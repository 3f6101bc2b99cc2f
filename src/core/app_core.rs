use crate::config::Config;
use crate::core::input_router::route_input;
use crate::core::PageAction;
use crate::data::{Focus, NotificationCenter, PageState, SubmitOutcome, UiState};
use crate::widgets::{PracticeInput, TextEditable};
use crossterm::event::KeyEvent;
use std::time::{Duration, Instant};

/// Rows moved per mouse wheel notch
pub const WHEEL_SCROLL_ROWS: i32 = 3;

/// Core application state (frontend-agnostic)
///
/// AppCore owns the page state, focus/scroll state, the practice editing
/// buffer and the notification queue. The frontend feeds it input and reads
/// it back to render.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Selected card, practice text and tip visibility
    pub page: PageState,

    /// Focus and scroll
    pub ui_state: UiState,

    /// Editing buffer mirrored into `page.practice_text`
    pub practice_input: PracticeInput,

    /// Live toasts
    pub notifications: NotificationCenter,

    /// Application running flag
    pub running: bool,

    /// Set whenever state changed since the last frame
    pub needs_render: bool,

    /// Height of the scrollable page area, reported by the frontend
    pub viewport_height: u16,
}

impl AppCore {
    pub fn new(config: Config) -> Self {
        let notifications = NotificationCenter::new(
            Duration::from_millis(config.ui.toast_duration_ms),
            config.ui.max_toasts,
        );

        Self {
            config,
            page: PageState::new(),
            ui_state: UiState::new(),
            practice_input: PracticeInput::new(),
            notifications,
            running: true,
            needs_render: true,
            viewport_height: 0,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = route_input(key, self.ui_state.focus);
        self.apply(action);
    }

    /// Apply one page action
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::None => return,
            PageAction::ToggleCard(index) => self.page.toggle_card(index),
            PageAction::ToggleTip => self.page.toggle_tip(),
            PageAction::SubmitPractice => self.submit_practice(),
            PageAction::ActivateFocused => self.activate(self.ui_state.focus),

            PageAction::FocusNext => self.ui_state.set_focus(self.ui_state.focus.next()),
            PageAction::FocusPrevious => self.ui_state.set_focus(self.ui_state.focus.previous()),
            PageAction::FocusOn(focus) => self.ui_state.set_focus(focus),

            PageAction::ScrollBy(delta) => self.ui_state.scroll_by(delta),
            PageAction::ScrollPages(pages) => {
                let page = self.viewport_height.saturating_sub(1).max(1) as i32;
                self.ui_state.scroll_by(pages * page);
            }
            PageAction::ScrollToTop => self.ui_state.scroll = 0,
            PageAction::ScrollToBottom => self.ui_state.scroll = u16::MAX, // clamped on render

            PageAction::EditPractice(key) => {
                if self.practice_input.input(key) {
                    self.sync_practice_text();
                }
            }
            PageAction::SelectAll => self.practice_input.select_all(),
            PageAction::Copy => {
                if let Err(e) = self.practice_input.copy_to_clipboard() {
                    tracing::warn!("Copy failed: {:#}", e);
                }
            }
            PageAction::Cut => match self.practice_input.cut_to_clipboard() {
                Ok(true) => self.sync_practice_text(),
                Ok(false) => {}
                Err(e) => {
                    // The text is already gone from the field
                    self.sync_practice_text();
                    tracing::warn!("Cut failed: {:#}", e);
                }
            },
            PageAction::Paste => match self.practice_input.paste_from_clipboard() {
                Ok(()) => self.sync_practice_text(),
                Err(e) => tracing::warn!("Paste failed: {:#}", e),
            },

            PageAction::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
        }
        self.needs_render = true;
    }

    /// Activate an element as if it were clicked
    pub fn activate(&mut self, target: Focus) {
        match target {
            Focus::Card(index) => self.page.toggle_card(index),
            Focus::TipButton => self.page.toggle_tip(),
            Focus::PracticeInput => {}
            Focus::SubmitButton => self.submit_practice(),
        }
    }

    /// Mouse click on a page element (None = empty space)
    pub fn handle_click(&mut self, target: Option<Focus>) {
        let Some(target) = target else {
            return;
        };
        tracing::debug!("Clicked {:?}", target);
        self.ui_state.focus = target;
        self.activate(target);
        self.needs_render = true;
    }

    /// Bracketed paste from the terminal goes into the practice input
    pub fn handle_paste(&mut self, text: &str) {
        self.ui_state.set_focus(Focus::PracticeInput);
        // Some terminals send bare CR line endings
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        if self.practice_input.insert_str(&text) {
            self.sync_practice_text();
        }
        self.needs_render = true;
    }

    pub fn handle_wheel(&mut self, notches: i32) {
        self.ui_state.scroll_by(notches * WHEEL_SCROLL_ROWS);
        self.needs_render = true;
    }

    /// Expire old toasts
    pub fn tick(&mut self, now: Instant) {
        if self.notifications.prune_expired(now) {
            tracing::debug!("{} toasts still visible", self.notifications.len());
            self.needs_render = true;
        }
    }

    fn sync_practice_text(&mut self) {
        self.page.set_practice_text(self.practice_input.text());
    }

    fn submit_practice(&mut self) {
        match self.page.submit_practice(&mut self.notifications) {
            SubmitOutcome::Accepted => self.practice_input.clear(),
            SubmitOutcome::Empty => tracing::debug!("Rejected empty practice entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::content::{PRACTICE_EMPTY_MESSAGE, PRACTICE_SUCCESS_MESSAGE};
    use crate::data::NotificationLevel;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn core() -> AppCore {
        AppCore::new(Config::default())
    }

    fn press(core: &mut AppCore, code: KeyCode) {
        core.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(core: &mut AppCore, text: &str) {
        for c in text.chars() {
            press(core, KeyCode::Char(c));
        }
    }

    fn last_toast(core: &AppCore) -> Option<(NotificationLevel, String)> {
        core.notifications
            .visible()
            .last()
            .map(|n| (n.level, n.message.clone()))
    }

    #[test]
    fn test_enter_on_focused_card_toggles() {
        let mut core = core();
        assert_eq!(core.ui_state.focus, Focus::Card(0));

        press(&mut core, KeyCode::Enter);
        assert_eq!(core.page.selected_card(), Some(0));

        press(&mut core, KeyCode::Enter);
        assert_eq!(core.page.selected_card(), None);
    }

    #[test]
    fn test_click_moves_selection() {
        let mut core = core();
        core.handle_click(Some(Focus::Card(1)));
        core.handle_click(Some(Focus::Card(3)));
        assert_eq!(core.page.selected_card(), Some(3));
        assert_eq!(core.ui_state.focus, Focus::Card(3));

        core.handle_click(None);
        assert_eq!(core.page.selected_card(), Some(3));
    }

    #[test]
    fn test_tip_shortcut_flips() {
        let mut core = core();
        press(&mut core, KeyCode::Char('t'));
        assert!(core.page.tip_visible());
        core.handle_click(Some(Focus::TipButton));
        assert!(!core.page.tip_visible());
    }

    #[test]
    fn test_typing_mirrors_into_page_state() {
        let mut core = core();
        core.apply(PageAction::FocusOn(Focus::PracticeInput));
        type_text(&mut core, " Draft  memo ");
        assert_eq!(core.page.practice_text(), " Draft  memo ");
        assert_eq!(core.practice_input.text(), " Draft  memo ");
    }

    #[test]
    fn test_submit_clears_input_on_success() {
        let mut core = core();
        core.apply(PageAction::FocusOn(Focus::PracticeInput));
        type_text(&mut core, "Draft memo for client review");
        core.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(core.page.practice_text(), "");
        assert!(core.practice_input.is_empty());
        assert_eq!(
            last_toast(&core),
            Some((NotificationLevel::Success, PRACTICE_SUCCESS_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_submit_whitespace_keeps_input() {
        let mut core = core();
        core.apply(PageAction::FocusOn(Focus::PracticeInput));
        type_text(&mut core, "   ");
        core.handle_click(Some(Focus::SubmitButton));

        assert_eq!(core.page.practice_text(), "   ");
        assert_eq!(core.practice_input.text(), "   ");
        assert_eq!(
            last_toast(&core),
            Some((NotificationLevel::Error, PRACTICE_EMPTY_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_paste_event_focuses_input() {
        let mut core = core();
        core.handle_paste("Review contract terms");
        assert_eq!(core.ui_state.focus, Focus::PracticeInput);
        assert_eq!(core.page.practice_text(), "Review contract terms");
    }

    #[test]
    fn test_paste_normalizes_carriage_returns() {
        let mut core = core();
        core.handle_paste("Review lease\rDraft notes\r\nCall client");
        assert_eq!(
            core.page.practice_text(),
            "Review lease\nDraft notes\nCall client"
        );
        assert!(!core.page.practice_text().contains('\r'));
    }

    #[test]
    fn test_cut_syncs_practice_text() {
        let mut core = core();
        core.apply(PageAction::FocusOn(Focus::PracticeInput));
        type_text(&mut core, "Reviewed contract");
        core.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        // Clipboard may be unavailable here; the field is cut either way
        core.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));

        assert_eq!(core.page.practice_text(), "");
        assert!(core.practice_input.is_empty());
    }

    #[test]
    fn test_copy_without_selection_keeps_text() {
        let mut core = core();
        core.apply(PageAction::FocusOn(Focus::PracticeInput));
        type_text(&mut core, "Draft memo");
        core.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(core.page.practice_text(), "Draft memo");
        assert!(core.running);
    }

    #[test]
    fn test_toasts_expire_on_tick() {
        let mut core = core();
        core.apply(PageAction::SubmitPractice);
        assert_eq!(core.notifications.len(), 1);

        core.needs_render = false;
        core.tick(Instant::now() + Duration::from_secs(60));
        assert!(core.notifications.is_empty());
        assert!(core.needs_render);
    }

    #[test]
    fn test_quit() {
        let mut core = core();
        press(&mut core, KeyCode::Char('q'));
        assert!(!core.running);
    }

    #[test]
    fn test_page_scroll_uses_viewport() {
        let mut core = core();
        core.viewport_height = 21;
        core.apply(PageAction::ScrollPages(1));
        assert_eq!(core.ui_state.scroll, 20);
        core.apply(PageAction::ScrollToTop);
        assert_eq!(core.ui_state.scroll, 0);
    }
}
