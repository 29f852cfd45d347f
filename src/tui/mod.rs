//! Terminal integration (crossterm): raw mode lifecycle, signals and input.
//!
//! Kept apart from `kernel` so the editor model never depends on terminal
//! crates.

pub mod events;
pub mod terminal_guard;

pub use events::CrosstermEvents;
pub use terminal_guard::{
    install_termination_signals, TerminalGuard, TerminalRestorer, TerminationSignal,
};
