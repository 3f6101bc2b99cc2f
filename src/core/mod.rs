//! Core logic layer
//!
//! This module contains input routing and state management.
//! NO imports from frontend/ or rendering code.
//! Core updates data structures in the data layer, frontends read and render.

pub mod app_core;
pub mod input_router;
pub mod page_actions;

pub use app_core::AppCore;
pub use page_actions::PageAction;
