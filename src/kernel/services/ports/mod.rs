//! Service ports: traits + data contracts.

pub mod clipboard;
pub mod config;
pub mod dialogs;
pub mod file;
pub mod fonts;

pub use clipboard::{ClipboardError, ClipboardProvider, PASTE_MAX_SIZE};
pub use config::EditorConfig;
pub use dialogs::{Dialogs, FontDialogSeed, NoticeKind, SaveChoice};
pub use file::{DirEntry, FileError, FileProvider, Result as FileResult};
pub use fonts::{FontSource, FontSourceError};
