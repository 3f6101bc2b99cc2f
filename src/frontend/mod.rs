//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait implemented by the interactive
//! terminal frontend, plus the plain-text renderer used by `print`.

pub mod events;
pub mod plain;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait - interface between the event loop and a renderer
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events converted to the frontend-agnostic
    /// `FrontendEvent` enum (empty if nothing arrived before the timeout).
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Takes a mutable core because rendering reports the viewport height
    /// back and settles pending scroll requests.
    fn render(&mut self, core: &mut AppCore) -> Result<()>;

    /// Restore the terminal before exit
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size as (width, height)
    fn size(&self) -> (u16, u16);
}
