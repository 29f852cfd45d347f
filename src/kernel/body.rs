//! The body: the editable text buffer of the main window.
//!
//! Positions are char indices into the rope. A selection exists only when the
//! anchor is set and differs from the cursor, so an empty selection is never
//! observable through `selection()`.

use ropey::Rope;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Default)]
pub struct TextBody {
    rope: Rope,
    cursor: usize,
    anchor: Option<usize>,
    /// Sticky column for vertical motion.
    preferred_col: Option<usize>,
}

impl TextBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn content_eq(&self, other: &str) -> bool {
        self.rope == other
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Replaces the whole text; cursor goes to the start, selection is dropped.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = 0;
        self.anchor = None;
        self.preferred_col = None;
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Moves the cursor; with `extend` the selection grows from the current anchor.
    pub fn set_cursor(&mut self, pos: usize, extend: bool) {
        let pos = pos.min(self.len_chars());
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
        self.cursor = pos;
        self.preferred_col = None;
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some(anchor.min(self.cursor)..anchor.max(self.cursor))
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn selected_text(&self) -> Option<String> {
        self.selection()
            .map(|range| self.rope.slice(range).to_string())
    }

    pub fn select(&mut self, range: Range<usize>) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        self.anchor = Some(start);
        self.cursor = end;
        self.preferred_col = None;
    }

    pub fn select_all(&mut self) {
        self.select(0..self.len_chars());
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Removes the selected text and collapses the cursor to where it began.
    pub fn delete_selection(&mut self) -> Option<String> {
        let range = self.selection()?;
        let removed = self.rope.slice(range.clone()).to_string();
        self.rope.remove(range.clone());
        self.cursor = range.start;
        self.anchor = None;
        self.preferred_col = None;
        Some(removed)
    }

    /// Inserts at the cursor and moves the cursor past the inserted text.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            self.anchor = None;
            return;
        }
        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
        self.anchor = None;
        self.preferred_col = None;
    }

    /// Typing semantics: the selection, if any, is replaced.
    pub fn replace_selection(&mut self, text: &str) {
        self.delete_selection();
        self.insert(text);
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.replace_selection(ch.encode_utf8(&mut buf));
    }

    pub fn backspace(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        let start = self.prev_boundary(self.cursor);
        if start == self.cursor {
            return false;
        }
        self.rope.remove(start..self.cursor);
        self.cursor = start;
        self.preferred_col = None;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        let end = self.next_boundary(self.cursor);
        if end == self.cursor {
            return false;
        }
        self.rope.remove(self.cursor..end);
        self.preferred_col = None;
        true
    }

    // ==================== Motion ====================

    pub fn move_left(&mut self, extend: bool) {
        if !extend {
            if let Some(range) = self.selection() {
                self.set_cursor(range.start, false);
                return;
            }
        }
        let pos = self.prev_boundary(self.cursor);
        self.set_cursor(pos, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        if !extend {
            if let Some(range) = self.selection() {
                self.set_cursor(range.end, false);
                return;
            }
        }
        let pos = self.next_boundary(self.cursor);
        self.set_cursor(pos, extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        self.move_lines(-1, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        self.move_lines(1, extend);
    }

    /// Vertical motion by `delta` lines, keeping the preferred column.
    pub fn move_lines(&mut self, delta: isize, extend: bool) {
        let (line, col) = self.cursor_line_col();
        let col = self.preferred_col.unwrap_or(col);
        let last = self.len_lines().saturating_sub(1);
        let target = if delta < 0 {
            line.checked_sub(delta.unsigned_abs())
        } else {
            line.checked_add(delta as usize).filter(|l| *l <= last)
        };

        let pos = match target {
            Some(target) => self.char_index(target, col),
            None if delta < 0 => 0,
            None => self.len_chars(),
        };
        self.set_cursor(pos, extend);
        self.preferred_col = Some(col);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        let (line, _) = self.cursor_line_col();
        let pos = self.rope.line_to_char(line);
        self.set_cursor(pos, extend);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        let (line, _) = self.cursor_line_col();
        let pos = self.rope.line_to_char(line) + self.line_len(line);
        self.set_cursor(pos, extend);
    }

    pub fn move_doc_start(&mut self, extend: bool) {
        self.set_cursor(0, extend);
    }

    pub fn move_doc_end(&mut self, extend: bool) {
        self.set_cursor(self.len_chars(), extend);
    }

    // ==================== Lines ====================

    /// Line and column (in chars) of a char index.
    pub fn line_col(&self, pos: usize) -> (usize, usize) {
        let pos = pos.min(self.len_chars());
        let line = self.rope.char_to_line(pos);
        (line, pos - self.rope.line_to_char(line))
    }

    pub fn cursor_line_col(&self) -> (usize, usize) {
        self.line_col(self.cursor)
    }

    /// Char index for a line/column, clamped to the line's content.
    pub fn char_index(&self, line: usize, col: usize) -> usize {
        let line = line.min(self.len_lines().saturating_sub(1));
        self.rope.line_to_char(line) + col.min(self.line_len(line))
    }

    /// Length of a line in chars, excluding its line break.
    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        } else if len > 0 && slice.char(len - 1) == '\r' {
            len -= 1;
        }
        len
    }

    /// Line content without its line break.
    pub fn line_text(&self, line: usize) -> String {
        if line >= self.len_lines() {
            return String::new();
        }
        let start = self.rope.line_to_char(line);
        self.rope
            .slice(start..start + self.line_len(line))
            .to_string()
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let (line, col) = self.line_col(pos);
        if col == 0 {
            if line == 0 {
                return 0;
            }
            return self.rope.line_to_char(line - 1) + self.line_len(line - 1);
        }

        let text = self.line_text(line);
        let col = col.min(text.chars().count());
        let byte = char_to_byte(&text, col);
        let prev_byte = text
            .grapheme_indices(true)
            .map(|(idx, _)| idx)
            .take_while(|idx| *idx < byte)
            .last()
            .unwrap_or(0);
        self.rope.line_to_char(line) + text[..prev_byte].chars().count()
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let (line, col) = self.line_col(pos);
        let line_len = self.line_len(line);
        if col >= line_len {
            if line + 1 >= self.len_lines() {
                return self.len_chars();
            }
            return self.rope.line_to_char(line + 1);
        }

        let text = self.line_text(line);
        let byte = char_to_byte(&text, col);
        let next_byte = text[byte..]
            .graphemes(true)
            .next()
            .map(|g| byte + g.len())
            .unwrap_or(text.len());
        self.rope.line_to_char(line) + text[..next_byte].chars().count()
    }
}

fn char_to_byte(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/body.rs"]
mod tests;
