//! Clipboard functionality

use crate::utils::MultiviewError;
use arboard::Clipboard;

/// Get clipboard content
pub fn get_clipboard_content() -> Result<String, MultiviewError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| MultiviewError::ClipboardError(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map_err(|e| MultiviewError::ClipboardError(format!("Failed to read clipboard: {}", e)))
}
