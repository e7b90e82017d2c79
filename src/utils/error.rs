//! Error handling for Multiview

use thiserror::Error;

/// Main error type for Multiview
///
/// Normalization itself is permissive and never fails; `UnrecognizedReference`
/// is only surfaced as an advisory next to the input field.
#[derive(Debug, Error)]
pub enum MultiviewError {
    #[error("Input doesn't match a known YouTube link shape: {0}")]
    UnrecognizedReference(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Failed to open in browser: {0}")]
    BrowserError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
