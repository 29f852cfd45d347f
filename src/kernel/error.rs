use crate::kernel::services::ports::clipboard::ClipboardError;
use crate::kernel::services::ports::file::FileError;
use std::path::PathBuf;

/// Edit action that needs a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Copy,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

#[derive(Debug)]
pub enum EditorError {
    NoSelection {
        action: SelectionAction,
    },
    FileAccess {
        path: PathBuf,
        op: FileOp,
        source: FileError,
    },
    Clipboard(ClipboardError),
}

impl EditorError {
    /// Title of the notification that reports this error.
    pub fn title(&self) -> &'static str {
        match self {
            EditorError::NoSelection { .. } => "ERROR",
            EditorError::FileAccess { op: FileOp::Read, .. } => "Open failed",
            EditorError::FileAccess { op: FileOp::Write, .. } => "Save failed",
            EditorError::Clipboard(_) => "Clipboard",
        }
    }
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::NoSelection { action } => {
                let verb = match action {
                    SelectionAction::Copy => "copied",
                    SelectionAction::Delete => "deleted",
                };
                write!(f, "Select portion of text to be {}.", verb)
            }
            EditorError::FileAccess { path, op, source } => {
                let verb = match op {
                    FileOp::Read => "open",
                    FileOp::Write => "save",
                };
                write!(f, "Could not {} {}: {}", verb, path.display(), source)
            }
            EditorError::Clipboard(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::FileAccess { source, .. } => Some(source),
            EditorError::Clipboard(e) => Some(e),
            EditorError::NoSelection { .. } => None,
        }
    }
}

impl From<ClipboardError> for EditorError {
    fn from(err: ClipboardError) -> Self {
        EditorError::Clipboard(err)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/error.rs"]
mod tests;
