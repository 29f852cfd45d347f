//! Terminal mode lifecycle.
//!
//! `TerminalGuard` switches the terminal into the editor's modes and puts it
//! back when dropped. The `TerminalRestorer` it hands out can do the same from
//! the signal thread or a panic hook; whichever runs first wins.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// How long the event loop gets to exit on its own after a signal.
pub const SIGNAL_GRACE: Duration = Duration::from_secs(2);

/// Entering and leaving the editor's terminal modes.
pub trait TerminalModes: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;

    /// Leaves every mode, attempting all steps even after a failure.
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, mouse capture and bracketed paste.
#[derive(Debug, Default)]
pub struct EditorModes;

impl TerminalModes for EditorModes {
    fn enter(&self) -> io::Result<()> {
        use crossterm::cursor::SetCursorStyle;
        use crossterm::event::{EnableBracketedPaste, EnableMouseCapture};
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::BlinkingBar
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::cursor::{SetCursorStyle, Show};
        use crossterm::event::{DisableBracketedPaste, DisableMouseCapture};
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        let raw = disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            SetCursorStyle::DefaultUserShape,
            Show
        );
        raw.and(screen)
    }
}

/// Cloneable handle that leaves the terminal modes at most once.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    modes: Arc<dyn TerminalModes>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.modes.leave()
    }

    pub fn is_restored(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }

    /// Restores the terminal before the previous panic hook runs, so the
    /// panic message lands on the normal screen.
    pub fn install_panic_hook(&self) {
        let restorer = self.clone();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restorer.restore();
            previous(info);
        }));
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_modes(Arc::new(EditorModes))
    }

    pub fn with_modes(modes: Arc<dyn TerminalModes>) -> io::Result<Self> {
        modes.enter()?;
        let restorer = TerminalRestorer {
            done: Arc::new(AtomicBool::new(false)),
            modes,
        };
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    #[cfg(unix)]
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signal {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }

    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to `tx`. If the process is still running
/// `SIGNAL_GRACE` later, the thread restores the terminal and exits.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: Sender<TerminationSignal>,
) -> io::Result<JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        let Some(signal) = signals.forever().find_map(TerminationSignal::from_raw) else {
            return;
        };
        tracing::info!(?signal, "termination signal received");
        let _ = tx.send(signal);

        std::thread::sleep(SIGNAL_GRACE);
        tracing::warn!(?signal, "event loop did not stop, exiting");
        let _ = restorer.restore();
        std::process::exit(signal.exit_code());
    }))
}

/// Raw mode delivers Ctrl+C as a key press outside unix; nothing to install.
#[cfg(not(unix))]
pub fn install_termination_signals(
    _restorer: TerminalRestorer,
    _tx: Sender<TerminationSignal>,
) -> io::Result<JoinHandle<()>> {
    Ok(std::thread::spawn(|| {}))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
