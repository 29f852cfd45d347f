//! Modal dialogs of the UI surface.
//!
//! Every method blocks until the user closes the dialog. `None` means the
//! dialog was dismissed without confirming.

use crate::kernel::style::FontStyle;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Initial state of the font dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDialogSeed {
    pub families: Vec<String>,
    pub sizes: Vec<u16>,
    pub style: FontStyle,
}

pub trait Dialogs {
    /// "Save File?" with Save / Do Not Save / Cancel.
    fn ask_save_changes(&mut self, file_name: &str) -> SaveChoice;

    fn ask_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    fn ask_save_path(&mut self, suggested: Option<&Path>) -> Option<PathBuf>;

    /// Returns the confirmed style with all six fields taken from the dialog.
    fn edit_font(&mut self, seed: FontDialogSeed) -> Option<FontStyle>;

    fn choose_theme(&mut self, themes: &[String], current: &str) -> Option<String>;

    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str);
}
