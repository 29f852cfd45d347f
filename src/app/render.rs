use super::layout::{glyph_text, glyphs, BodyLayout, Glyph, TAB_DISPLAY_WIDTH};
use super::menu::{item_text, open_menu_rect, title_rects, OpenMenu};
use super::util::inner;
use super::window::{Window, MENU_BAR_HEIGHT, STATUS_HEIGHT};
use crate::core::MENU_BAR;
use crate::kernel::style::FontStyle;
use crate::kernel::Session;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Text modifiers a terminal can show for `style`. Family and size have no
/// per-cell equivalent and are shown in the status bar.
pub fn style_modifiers(style: &FontStyle) -> Modifier {
    let mut modifier = Modifier::empty();
    if style.bold {
        modifier |= Modifier::BOLD;
    }
    if style.italic {
        modifier |= Modifier::ITALIC;
    }
    if style.underline {
        modifier |= Modifier::UNDERLINED;
    }
    if style.strikethrough {
        modifier |= Modifier::CROSSED_OUT;
    }
    modifier
}

/// Body title: file name plus `*` while modified.
pub fn body_title(session: &Session) -> String {
    let marker = if session.is_modified() { "*" } else { "" };
    format!(" {}{} ", session.file_name(), marker)
}

pub fn status_text(session: &Session) -> String {
    let (line, col) = session.body.cursor_line_col();
    let style = &session.style;
    let flags = style.flag_labels();
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" {}", flags.join(" "))
    };
    let wrap = if session.word_wrap { "Wrap" } else { "No Wrap" };
    format!(
        " Ln {}, Col {} │ {} {}{} │ {} │ {}",
        line + 1,
        col + 1,
        style.family,
        style.size,
        flags,
        wrap,
        session.theme
    )
}

impl Window {
    pub fn render(&mut self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MENU_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        self.last_menu_bar = chunks[0];
        self.render_menu_bar(frame, chunks[0]);
        self.render_body(frame, chunks[1], session);
        self.render_status(frame, chunks[2], session);

        self.last_menu_popup = None;
        if let Some(open) = self.menu.open() {
            self.render_menu_popup(frame, open, area);
        }
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let base = Style::default().bg(self.theme.menu_bg).fg(self.theme.menu_fg);
        let active = Style::default()
            .bg(self.theme.menu_active_bg)
            .fg(self.theme.menu_active_fg);
        let open_bar = match self.menu.open() {
            Some(OpenMenu::Bar { menu, .. }) => Some(menu),
            _ => None,
        };

        let mut spans = Vec::new();
        for (idx, (menu, _)) in MENU_BAR.iter().zip(title_rects(area)).enumerate() {
            let style = if open_bar == Some(idx) { active } else { base };
            let mnemonic = style
                .fg(self.theme.menu_mnemonic_fg)
                .add_modifier(Modifier::UNDERLINED);

            spans.push(Span::styled(" ", style));
            let split = menu
                .title
                .char_indices()
                .find(|(_, c)| c.to_ascii_lowercase() == menu.mnemonic);
            match split {
                Some((i, c)) => {
                    let end = i + c.len_utf8();
                    spans.push(Span::styled(&menu.title[..i], style));
                    spans.push(Span::styled(&menu.title[i..end], mnemonic));
                    spans.push(Span::styled(&menu.title[end..], style));
                }
                None => spans.push(Span::styled(menu.title, style)),
            }
            spans.push(Span::styled(" ", style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect, session: &Session) {
        let theme = &self.theme;
        let modifiers = style_modifiers(&session.style);
        let text_style = Style::default()
            .bg(theme.body_bg)
            .fg(theme.body_fg)
            .add_modifier(modifiers);
        let selected_style = Style::default()
            .bg(theme.selection_bg)
            .fg(theme.selection_fg)
            .add_modifier(modifiers);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border).bg(theme.body_bg))
            .title(body_title(session))
            .style(Style::default().bg(theme.body_bg).fg(theme.body_fg));
        let inner_area = block.inner(area);
        frame.render_widget(block, area);
        self.last_body_inner = inner_area;

        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let width = inner_area.width as usize;
        let height = inner_area.height as usize;
        let wrap = session.word_wrap;
        let body = &session.body;
        let layout = BodyLayout::new(body, width, wrap);
        let (cursor_row, cursor_x) = layout.locate(body, body.cursor());

        if wrap {
            self.viewport.left = 0;
        }
        if self.follow_cursor {
            let view_width = if wrap { 0 } else { width };
            self.viewport.reveal(cursor_row, cursor_x, height, view_width);
        }
        self.viewport.top = self.viewport.top.min(layout.len().saturating_sub(1));
        let left = self.viewport.left;
        let selection = body.selection();

        let mut lines = Vec::with_capacity(height);
        let mut cached: Option<(usize, String, Vec<Glyph>)> = None;
        let rows = layout.rows();
        for (row_idx, row) in rows.iter().enumerate().skip(self.viewport.top).take(height) {
            if cached.as_ref().map_or(true, |(line, _, _)| *line != row.line) {
                let text = body.line_text(row.line);
                let line_glyphs = glyphs(&text);
                cached = Some((row.line, text, line_glyphs));
            }
            let Some((_, text, line_glyphs)) = cached.as_ref() else {
                continue;
            };
            let line_start = body.char_index(row.line, 0);
            let is_selected =
                |pos: usize| selection.as_ref().is_some_and(|range| range.contains(&pos));

            let mut spans = Vec::new();
            let mut x = 0usize;
            let mut used = 0usize;
            let first = line_glyphs.partition_point(|g| g.start < row.start);
            for idx in first..line_glyphs.len() {
                let glyph = line_glyphs[idx];
                if glyph.start >= row.end {
                    break;
                }
                let gx = x;
                x += glyph.width;
                if gx < left {
                    continue;
                }
                if used + glyph.width > width {
                    break;
                }
                used += glyph.width;
                let grapheme = glyph_text(text, line_glyphs, idx);
                let shown = if grapheme == "\t" {
                    " ".repeat(TAB_DISPLAY_WIDTH)
                } else {
                    grapheme.to_string()
                };
                let style = if is_selected(line_start + glyph.start) {
                    selected_style
                } else {
                    text_style
                };
                spans.push(Span::styled(shown, style));
            }

            // Selected line break.
            let last_row_of_line = rows.get(row_idx + 1).map_or(true, |n| n.line != row.line);
            let break_pos = line_start + body.line_len(row.line);
            if last_row_of_line
                && break_pos < body.len_chars()
                && is_selected(break_pos)
                && used < width
                && x >= left
            {
                spans.push(Span::styled(" ", selected_style));
            }

            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines).style(text_style), inner_area);

        if self.menu.is_open() {
            return;
        }
        let Some(screen_row) = cursor_row.checked_sub(self.viewport.top) else {
            return;
        };
        let Some(screen_x) = cursor_x.checked_sub(left) else {
            return;
        };
        if screen_row < height {
            let x = inner_area.x + (screen_x.min(width - 1)) as u16;
            let y = inner_area.y + screen_row as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        let hint = " F10 Menu  F1 Help ";
        let text = status_text(session);
        let pad = (area.width as usize).saturating_sub(text.width() + hint.width());
        let line = Line::from(vec![
            Span::styled(text, style),
            Span::styled(" ".repeat(pad), style),
            Span::styled(hint, style.fg(self.theme.muted_fg)),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }

    fn render_menu_popup(&mut self, frame: &mut Frame, open: OpenMenu, screen: Rect) {
        let area = open_menu_rect(open, self.last_menu_bar, screen);
        if area.width < 3 || area.height < 3 {
            return;
        }
        self.last_menu_popup = Some(area);

        let base = Style::default()
            .bg(self.theme.menu_bg)
            .fg(self.theme.menu_fg);
        let selected_style = Style::default()
            .bg(self.theme.menu_active_bg)
            .fg(self.theme.menu_active_fg);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(base.fg(self.theme.border))
                .style(base),
            area,
        );

        let content = inner(area);
        let text_width = (content.width as usize).saturating_sub(2);
        let selected = self.menu.selected();
        let lines: Vec<Line> = self
            .menu
            .items()
            .iter()
            .enumerate()
            .take(content.height as usize)
            .map(|(idx, command)| {
                let style = if selected == Some(idx) {
                    selected_style
                } else {
                    base
                };
                Line::from(Span::styled(
                    format!(" {} ", item_text(*command, text_width)),
                    style,
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).style(base), content);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
