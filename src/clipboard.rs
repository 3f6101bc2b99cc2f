//! System clipboard access for the practice entry box
//!
//! Uses arboard for cross-platform clipboard access

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to system clipboard
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(()); // Nothing to copy
    }

    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

/// Paste text from system clipboard
pub fn paste() -> Result<String> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    let text = clipboard.get_text().context("Failed to read clipboard")?;
    tracing::debug!("Pasted {} bytes from clipboard", text.len());
    Ok(text)
}

/// Cut text to clipboard (copy only; the caller removes the text)
pub fn cut(text: &str) -> Result<()> {
    copy(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires clipboard access, may fail in CI
    fn test_copy_paste() {
        let entry = "Review and draft revisions to settlement agreement";
        copy(entry).expect("Copy failed");
        let result = paste().expect("Paste failed");
        assert_eq!(result, entry);
    }

    #[test]
    fn test_empty_copy() {
        // Should not touch the clipboard at all
        assert!(copy("").is_ok());
    }
}
