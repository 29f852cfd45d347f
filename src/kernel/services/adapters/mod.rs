//! Service adapters: OS specific implementations of the ports.

pub mod clipboard;
pub mod config;
pub mod file;
pub mod fonts;
pub mod paths;

pub use clipboard::{ClipboardService, MemoryClipboard};
pub use config::{load_config, load_config_from};
pub use file::LocalFileProvider;
pub use fonts::SystemFontSource;
pub use paths::{ensure_log_dir, fallback_log_dir, get_log_dir};
