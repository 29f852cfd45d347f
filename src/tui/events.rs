//! Input from the real terminal.

use super::terminal_guard::TerminationSignal;
use crate::app::EventSource;
use crate::core::event::InputEvent;
use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

/// How long one poll waits before the signal channel is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Blocking crossterm reader that ends when a termination signal arrives.
pub struct CrosstermEvents {
    signals: Receiver<TerminationSignal>,
    received: Option<TerminationSignal>,
}

impl CrosstermEvents {
    pub fn new(signals: Receiver<TerminationSignal>) -> Self {
        Self {
            signals,
            received: None,
        }
    }

    /// The signal that ended input, if any.
    pub fn received_signal(&self) -> Option<TerminationSignal> {
        self.received
    }

    fn check_signal(&mut self) -> bool {
        if self.received.is_some() {
            return true;
        }
        match self.signals.try_recv() {
            Ok(signal) => {
                self.received = Some(signal);
                true
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => false,
        }
    }
}

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Option<InputEvent>> {
        loop {
            if self.check_signal() {
                return Ok(None);
            }
            if !crossterm::event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Some(event) = InputEvent::from_terminal(crossterm::event::read()?) {
                return Ok(Some(event));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/events.rs"]
mod tests;
