//! Plain-text rendering of the page for `timekeeping-guide print`.
//!
//! Uses the same layout and section renderers as the TUI, then strips styling.

use crate::data::PageState;
use crate::frontend::tui::layout::PageLayout;
use crate::frontend::tui::page::{buffer_to_lines, render_page};
use crate::theme::ThemePresets;
use crate::widgets::PracticeInput;
use anyhow::{bail, Result};

/// Narrowest width the page can be laid out at
pub const MIN_WIDTH: u16 = 24;

/// Render `page` at `width` columns as plain text
pub fn render_plain_text(page: &PageState, width: u16) -> Result<String> {
    if width < MIN_WIDTH {
        bail!("Width must be at least {} columns (got {})", MIN_WIDTH, width);
    }

    let theme = ThemePresets::dark();
    let layout = PageLayout::compute(width, page, &theme);
    let mut input = PracticeInput::new();
    let buf = render_page(&layout, page, None, &mut input, &theme);

    let mut text = buffer_to_lines(&buf).join("\n");
    text.push('\n');
    Ok(text)
}
