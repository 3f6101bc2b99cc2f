//! Widget state structs
//!
//! State that outlives a single frame and is owned by the core, such as the
//! practice entry's editing buffer. Rendering lives in `frontend::tui`.

pub mod practice_input;
pub mod text_editable;

pub use practice_input::PracticeInput;
pub use text_editable::TextEditable;
