//! Clipboard port.

/// Pastes above this size are refused.
pub const PASTE_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    GetFailed(String),
    SetFailed(String),
    TooLarge(usize),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "Clipboard is not available"),
            ClipboardError::GetFailed(e) => write!(f, "Reading the clipboard failed: {}", e),
            ClipboardError::SetFailed(e) => write!(f, "Writing the clipboard failed: {}", e),
            ClipboardError::TooLarge(size) => write!(
                f,
                "Clipboard text too large ({} MB, limit {} MB)",
                size / 1024 / 1024,
                PASTE_MAX_SIZE / 1024 / 1024
            ),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
