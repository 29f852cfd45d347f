//! quill - a small terminal text editor.
//!
//! Module layout:
//! - core: commands, menu bar layout, input events
//! - kernel: editor model, command handlers, service ports and adapters
//! - app: terminal window, menus, dialogs and the event loop (`tui`)
//! - tui: terminal lifecycle, signals and crossterm input (`tui`)

#[cfg(feature = "tui")]
pub mod app;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
