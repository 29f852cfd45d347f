pub use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Terminal input the window and dialogs react to. Focus changes are not
/// represented; `from_terminal` drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Only forces a redraw.
    Resize(u16, u16),
    /// Bracketed paste.
    Paste(String),
}

impl InputEvent {
    pub fn from_terminal(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::Event;

        match event {
            Event::Key(e) => Some(InputEvent::Key(e)),
            Event::Mouse(e) => Some(InputEvent::Mouse(e)),
            Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
            Event::Paste(text) => Some(InputEvent::Paste(text)),
            Event::FocusGained | Event::FocusLost => None,
        }
    }

    /// Presses and repeats; releases (reported by some terminals) are dropped.
    pub fn key_press(&self) -> Option<&KeyEvent> {
        match self {
            InputEvent::Key(e) if e.kind != KeyEventKind::Release => Some(e),
            _ => None,
        }
    }

    /// Cell of a left button press.
    pub fn left_click(&self) -> Option<(u16, u16)> {
        match self {
            InputEvent::Mouse(m) if m.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some((m.column, m.row))
            }
            _ => None,
        }
    }

    /// Vertical wheel step (-1 up, 1 down) and the cell it happened over.
    pub fn wheel(&self) -> Option<(isize, u16, u16)> {
        let InputEvent::Mouse(m) = self else {
            return None;
        };
        match m.kind {
            MouseEventKind::ScrollUp => Some((-1, m.column, m.row)),
            MouseEventKind::ScrollDown => Some((1, m.column, m.row)),
            _ => None,
        }
    }
}

/// A key chord as bound in the keymap. Uppercase letters are folded into
/// lowercase plus SHIFT, since terminals disagree on which they report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn ctrl_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL | KeyModifiers::SHIFT)
    }

    /// The letter of an Alt+letter chord.
    pub fn alt_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(ch) if self.modifiers == KeyModifiers::ALT => Some(ch),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(ch) if ch.is_ascii_uppercase() => Self::new(
                KeyCode::Char(ch.to_ascii_lowercase()),
                event.modifiers | KeyModifiers::SHIFT,
            ),
            code => Self::new(code, event.modifiers),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
