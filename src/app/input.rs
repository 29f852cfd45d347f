//! Single-line text field of the path prompt.
//!
//! The cursor is a byte offset that always sits on a char boundary.

use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    /// A field holding `text` with the cursor at its end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.text.replace_range(self.cursor..next, "");
        true
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }

    /// Editing and motion keys. Returns false for keys the field ignores.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char(ch) if !ctrl && !event.modifiers.contains(KeyModifiers::ALT) => {
                let mut buf = [0u8; 4];
                self.insert_str(ch.encode_utf8(&mut buf));
            }
            KeyCode::Char('u') if ctrl => {
                self.text.replace_range(..self.cursor, "");
                self.cursor = 0;
            }
            KeyCode::Backspace => {
                self.backspace();
            }
            KeyCode::Delete => {
                self.delete();
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
            }
            KeyCode::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.len(),
            _ => return false,
        }
        true
    }

    /// Byte range shown in a field `width` cells wide and the cursor's cell
    /// inside it. The cell after the text is kept free for the cursor.
    pub fn view(&self, width: usize) -> (Range<usize>, usize) {
        if width == 0 {
            return (self.cursor..self.cursor, 0);
        }

        let prefix = &self.text[..self.cursor];
        let start = if prefix.width() < width {
            0
        } else {
            let mut start = self.cursor;
            let mut used = 0usize;
            for (idx, ch) in prefix.char_indices().rev() {
                let w = ch.width().unwrap_or(0);
                if used + w >= width {
                    break;
                }
                used += w;
                start = idx;
            }
            start
        };

        let mut end = start;
        let mut used = 0usize;
        for (idx, ch) in self.text[start..].char_indices() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end = start + idx + ch.len_utf8();
        }

        let cursor_x = self.text[start..self.cursor].width();
        (start..end, cursor_x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/input.rs"]
mod tests;
