//! One-shot clipboard write for the assembled command.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("Clipboard error: {0}.")]
    Unavailable(String),
}

pub fn copy(text: &str) -> Result<(), ClipError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipError::Unavailable(e.to_string()))
}
