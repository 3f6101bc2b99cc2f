//! Frontend-agnostic input events.
//!
//! The TUI translates its native crossterm event stream into this enum so the
//! main loop only handles one event shape.

use crossterm::event::{KeyEvent, MouseEventKind};

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input (press events only)
    Key(KeyEvent),
    /// Mouse input (left click or wheel)
    Mouse { kind: MouseEventKind, x: u16, y: u16 },
    /// Terminal/window resize
    Resize { width: u16, height: u16 },
    /// Bracketed paste
    Paste { text: String },
}

impl FrontendEvent {
    /// Create a mouse event
    pub fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self::Mouse { kind, x, y }
    }

    /// Create a resize event
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    /// Create a paste event
    pub fn paste(text: String) -> Self {
        Self::Paste { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_event_creation() {
        let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert!(matches!(FrontendEvent::Key(key), FrontendEvent::Key(_)));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));

        let paste = FrontendEvent::paste("Review lease".to_string());
        assert_eq!(
            paste,
            FrontendEvent::Paste {
                text: "Review lease".to_string()
            }
        );
    }
}
