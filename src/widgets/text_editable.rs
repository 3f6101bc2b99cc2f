//! Clipboard and selection behavior shared by text input widgets

use anyhow::Result;
use tui_textarea::TextArea;

/// Trait for widgets with text input fields
pub trait TextEditable {
    /// Get mutable reference to the currently focused text field
    fn get_focused_field_mut(&mut self) -> Option<&mut TextArea<'static>>;

    /// Select all text in the focused field (Ctrl+A)
    fn select_all(&mut self) {
        if let Some(field) = self.get_focused_field_mut() {
            field.select_all();
        }
    }

    /// Text of the active selection, or None without one.
    ///
    /// The yank buffer keeps old cuts and kills, so it is only read while a
    /// selection exists.
    fn selected_text(&mut self) -> Option<String> {
        let field = self.get_focused_field_mut()?;
        field.selection_range()?;
        field.copy();
        Some(field.yank_text()).filter(|text| !text.is_empty())
    }

    /// Remove the active selection from the field and return it
    fn cut_selection(&mut self) -> Option<String> {
        let field = self.get_focused_field_mut()?;
        field.selection_range()?;
        if !field.cut() {
            return None;
        }
        Some(field.yank_text())
    }

    /// Copy selected text to clipboard (Ctrl+C)
    fn copy_to_clipboard(&mut self) -> Result<()> {
        if let Some(selected) = self.selected_text() {
            crate::clipboard::copy(&selected)?;
        }
        Ok(())
    }

    /// Cut selected text to clipboard (Ctrl+X)
    ///
    /// Returns true if the field content changed.
    fn cut_to_clipboard(&mut self) -> Result<bool> {
        let Some(selected) = self.cut_selection() else {
            return Ok(false);
        };
        crate::clipboard::cut(&selected)?;
        Ok(true)
    }

    /// Paste text from clipboard (Ctrl+V)
    fn paste_from_clipboard(&mut self) -> Result<()> {
        let text = crate::clipboard::paste()?;
        if let Some(field) = self.get_focused_field_mut() {
            field.insert_str(&text);
        }
        Ok(())
    }
}
