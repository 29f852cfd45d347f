//! The editing session: one per process, owned by the `Editor`.

use super::body::TextBody;
use super::style::FontStyle;
use crate::kernel::services::ports::config::EditorConfig;
use std::path::{Path, PathBuf};

pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone)]
pub struct Session {
    /// `None` or a path that was opened or saved-as.
    pub open_file: Option<PathBuf>,
    pub style: FontStyle,
    pub word_wrap: bool,
    pub body: TextBody,
    pub theme: String,
    /// Body text as last loaded or written, for the modified marker.
    baseline: Option<String>,
}

impl Session {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            open_file: None,
            style: config.style.clone(),
            word_wrap: config.word_wrap,
            body: TextBody::new(),
            theme: config.theme.clone(),
            baseline: None,
        }
    }

    pub fn file_name(&self) -> String {
        self.open_file
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn open_dir(&self) -> Option<&Path> {
        self.open_file.as_deref().and_then(Path::parent)
    }

    /// Whether the body differs from what was last loaded or written.
    ///
    /// An untitled session is modified as soon as it has any text.
    pub fn is_modified(&self) -> bool {
        match &self.baseline {
            Some(base) => !self.body.content_eq(base),
            None => !self.body.is_empty(),
        }
    }

    /// Replaces the body with `text` read from `path`.
    pub fn load(&mut self, path: PathBuf, text: &str) {
        self.body.set_text(text);
        self.open_file = Some(path);
        self.baseline = Some(text.to_string());
    }

    /// Records a successful write of the current body to `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.baseline = Some(self.body.text());
        self.open_file = Some(path);
    }

    /// Empty body, no file.
    pub fn reset(&mut self) {
        self.body.clear();
        self.open_file = None;
        self.baseline = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
