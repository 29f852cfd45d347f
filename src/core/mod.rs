//! Core definitions shared by every layer:
//! - Command: the closed set of menu actions and the menu bar layout
//! - Event: terminal input events (only with the `tui` frontend)

pub mod command;
#[cfg(feature = "tui")]
pub mod event;

pub use command::{Command, Menu, MenuId, CONTEXT_MENU, MENU_BAR};
#[cfg(feature = "tui")]
pub use event::{InputEvent, Key};
