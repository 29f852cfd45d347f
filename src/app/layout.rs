//! Body layout: maps buffer positions to screen rows and back.
//!
//! Rendering, cursor placement and mouse hit-testing all go through
//! `BodyLayout`, so what is drawn and what is clicked always agree.

use crate::kernel::TextBody;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Cells a tab character occupies.
pub const TAB_DISPLAY_WIDTH: usize = 4;

/// One screen row: the char range `start..end` of buffer line `line`,
/// line break excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualRow {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// A grapheme of a line: char offset, byte offset, char count and display
/// width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub start: usize,
    pub byte: usize,
    pub len: usize,
    pub width: usize,
    /// Every char of the grapheme is whitespace; rows may break after it.
    pub space: bool,
}

pub fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        TAB_DISPLAY_WIDTH
    } else {
        g.width()
    }
}

pub fn glyphs(line: &str) -> Vec<Glyph> {
    let mut start = 0;
    line.grapheme_indices(true)
        .map(|(byte, g)| {
            let len = g.chars().count();
            let glyph = Glyph {
                start,
                byte,
                len,
                width: grapheme_width(g),
                space: g.chars().all(char::is_whitespace),
            };
            start += len;
            glyph
        })
        .collect()
}

/// The grapheme `glyphs[idx]` of `line`.
pub fn glyph_text<'a>(line: &'a str, glyphs: &[Glyph], idx: usize) -> &'a str {
    let start = glyphs[idx].byte;
    let end = glyphs.get(idx + 1).map_or(line.len(), |g| g.byte);
    &line[start..end]
}

/// Display width of the chars `range` of `line`.
pub fn width_of(line: &str, range: Range<usize>) -> usize {
    glyphs(line)
        .iter()
        .filter(|g| g.start >= range.start && g.start < range.end)
        .map(|g| g.width)
        .sum()
}

/// Char ranges of the rows `line` occupies when wrapped at `width` cells.
///
/// Rows break after the last whitespace that fits; one trailing whitespace
/// may hang past the edge. A word wider than a row is split.
pub fn wrap_line(line: &str, width: usize) -> Vec<Range<usize>> {
    let glyphs = glyphs(line);
    let total: usize = glyphs.iter().map(|g| g.len).sum();
    if width == 0 || glyphs.is_empty() {
        return vec![0..total];
    }

    let mut rows = Vec::new();
    let mut row_start = 0usize;
    let mut used = 0usize;
    let mut last_break: Option<usize> = None;
    // Width of the glyphs after `last_break`.
    let mut since_break = 0usize;

    for glyph in &glyphs {
        let overflows = used + glyph.width > width && glyph.start > row_start;

        if overflows && !(glyph.space && used <= width) {
            let (cut, carried) = match last_break {
                Some(b) if b > row_start => (b, since_break),
                _ => (glyph.start, 0),
            };
            rows.push(row_start..cut);
            row_start = cut;
            last_break = None;
            used = carried;
            since_break = carried;
        }

        used += glyph.width;
        since_break += glyph.width;
        if glyph.space {
            last_break = Some(glyph.start + glyph.len);
            since_break = 0;
        }
    }

    rows.push(row_start..total);
    rows
}

#[derive(Debug, Clone, Default)]
pub struct BodyLayout {
    rows: Vec<VisualRow>,
    /// Index of the first row of each buffer line.
    line_rows: Vec<usize>,
}

impl BodyLayout {
    /// Lays out `body` in rows `width` cells wide; without `wrap` every
    /// buffer line is one row.
    pub fn new(body: &TextBody, width: usize, wrap: bool) -> Self {
        let lines = body.len_lines().max(1);
        let mut rows = Vec::with_capacity(lines);
        let mut line_rows = Vec::with_capacity(lines);

        for line in 0..lines {
            line_rows.push(rows.len());
            if wrap {
                let text = body.line_text(line);
                for range in wrap_line(&text, width) {
                    rows.push(VisualRow {
                        line,
                        start: range.start,
                        end: range.end,
                    });
                }
            } else {
                rows.push(VisualRow {
                    line,
                    start: 0,
                    end: body.line_len(line),
                });
            }
        }

        Self { rows, line_rows }
    }

    pub fn rows(&self) -> &[VisualRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn rows_of_line(&self, line: usize) -> Range<usize> {
        let line = line.min(self.line_rows.len().saturating_sub(1));
        let start = self.line_rows.get(line).copied().unwrap_or(0);
        let end = self
            .line_rows
            .get(line + 1)
            .copied()
            .unwrap_or(self.rows.len());
        start..end
    }

    /// Row index and display column of char position `pos`.
    pub fn locate(&self, body: &TextBody, pos: usize) -> (usize, usize) {
        let (line, col) = body.line_col(pos);
        let rows = self.rows_of_line(line);
        let last = rows.end.saturating_sub(1);
        let row_idx = rows
            .clone()
            .find(|&r| col < self.rows[r].end)
            .unwrap_or(last)
            .max(rows.start);

        let Some(row) = self.rows.get(row_idx) else {
            return (0, 0);
        };
        let text = body.line_text(line);
        (row_idx, width_of(&text, row.start..col))
    }

    /// Char position drawn at display column `x` of row `row`.
    pub fn position_at(&self, body: &TextBody, row: usize, x: usize) -> usize {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return 0;
        };
        let row_idx = row.min(last);
        let visual = self.rows[row_idx];
        let line_start = body.char_index(visual.line, 0);
        let text = body.line_text(visual.line);

        let mut used = 0;
        let mut last_start = visual.start;
        for glyph in glyphs(&text)
            .into_iter()
            .filter(|g| g.start >= visual.start && g.start < visual.end)
        {
            if x < used + glyph.width.max(1) {
                return line_start + glyph.start;
            }
            used += glyph.width;
            last_start = glyph.start;
        }

        let wraps_on = self.rows.get(row_idx + 1).is_some_and(|n| n.line == visual.line);
        if wraps_on && visual.end > visual.start {
            line_start + last_start
        } else {
            line_start + visual.end
        }
    }
}

/// Scroll offsets of the body view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub top: usize,
    pub left: usize,
}

impl Viewport {
    /// Scrolls the minimum needed for cell (`row`, `x`) to be inside a
    /// `height` x `width` view.
    pub fn reveal(&mut self, row: usize, x: usize, height: usize, width: usize) {
        if height > 0 {
            if row < self.top {
                self.top = row;
            } else if row >= self.top + height {
                self.top = row + 1 - height;
            }
        }
        if width > 0 {
            if x < self.left {
                self.left = x;
            } else if x >= self.left + width {
                self.left = x + 1 - width;
            }
        }
    }

    pub fn scroll_rows(&mut self, delta: isize, total_rows: usize, height: usize) {
        let max_top = total_rows.saturating_sub(height.max(1));
        self.top = self.top.saturating_add_signed(delta).min(max_top);
    }

    pub fn scroll_cols(&mut self, delta: isize) {
        self.left = self.left.saturating_add_signed(delta);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/layout.rs"]
mod tests;
