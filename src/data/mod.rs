//! Data layer - Pure state without UI coupling
//!
//! This module contains the page content and UI state as pure data structures.
//! NO imports from frontend/ or any rendering code.

pub mod content;
pub mod notifications;
pub mod page_state;
pub mod ui_state;

pub use notifications::{NotificationCenter, NotificationLevel, Notifier};
pub use page_state::{PageState, SubmitOutcome};
pub use ui_state::{Focus, UiState};
