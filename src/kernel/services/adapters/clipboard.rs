//! Clipboard service
//!
//! Wraps the system clipboard. When the host has no clipboard (headless
//! sessions, bare TTYs) copy/paste still work inside the process.

use crate::kernel::services::ports::clipboard::{
    ClipboardError, ClipboardProvider, PASTE_MAX_SIZE,
};
use arboard::Clipboard;

pub struct ClipboardService {
    system: Option<Clipboard>,
    fallback: MemoryClipboard,
}

impl ClipboardService {
    pub fn new() -> Self {
        let system = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::warn!(error = %err, "system clipboard unavailable, using in-process clipboard");
                None
            }
        };
        Self {
            system,
            fallback: MemoryClipboard::new(),
        }
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardProvider for ClipboardService {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let Some(clipboard) = self.system.as_mut() else {
            return self.fallback.get_text();
        };

        check_size(system_text(clipboard.get_text())?)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let Some(clipboard) = self.system.as_mut() else {
            return self.fallback.set_text(text);
        };

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::SetFailed(e.to_string()))
    }
}

/// Process-local clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        check_size(self.text.clone().unwrap_or_default())
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// An empty host clipboard reads as empty text.
fn system_text(read: Result<String, arboard::Error>) -> Result<String, ClipboardError> {
    match read {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(err) => Err(ClipboardError::GetFailed(err.to_string())),
    }
}

fn check_size(text: String) -> Result<String, ClipboardError> {
    if text.len() > PASTE_MAX_SIZE {
        return Err(ClipboardError::TooLarge(text.len()));
    }
    Ok(text)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;
