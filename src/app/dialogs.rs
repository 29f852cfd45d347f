//! Terminal implementation of the `Dialogs` port.
//!
//! Each dialog is a `Modal` run in a nested loop: draw the last main frame as
//! a backdrop, draw the dialog over it, feed it the next input event, repeat
//! until it returns a result. I/O failures and a closed event source end the
//! dialog as if it had been cancelled; `TuiDialogs::finish` hands them back to
//! the main loop afterwards.

use super::input::LineInput;
use super::layout::wrap_line;
use super::render::style_modifiers;
use super::theme::UiTheme;
use super::util::{centered_box, inner, list_offset, rect_contains};
use super::EventSource;
use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::services::ports::dialogs::{Dialogs, FontDialogSeed, NoticeKind, SaveChoice};
use crate::kernel::services::ports::file::FileProvider;
use crate::kernel::style::FontStyle;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use ratatui::{Frame, Terminal};
use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use unicode_width::UnicodeWidthStr;

const BUTTON_GAP: u16 = 2;
const PATH_CANDIDATE_ROWS: usize = 5;
const PREVIEW_TEXT: &str = "AaBbYyZz 0123";

pub enum Step<T> {
    Continue,
    Done(T),
}

pub trait Modal {
    type Output;

    fn render(&mut self, frame: &mut Frame, screen: Rect, theme: &UiTheme);

    fn handle(&mut self, event: &InputEvent) -> Step<Self::Output>;

    /// Result when the dialog is closed without an answer.
    fn cancelled(&self) -> Self::Output;
}

/// Copies the cells of a finished frame.
pub struct Backdrop<'a>(pub &'a Buffer);

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let (Some(src), Some(dst)) = (self.0.cell((x, y)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }
}

pub struct TuiDialogs<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    events: &'a mut dyn EventSource,
    theme: &'a UiTheme,
    backdrop: &'a Buffer,
    files: &'a dyn FileProvider,
    failure: Option<io::Error>,
    closed: bool,
}

impl<'a, B: Backend> TuiDialogs<'a, B> {
    pub fn new(
        terminal: &'a mut Terminal<B>,
        events: &'a mut dyn EventSource,
        theme: &'a UiTheme,
        backdrop: &'a Buffer,
        files: &'a dyn FileProvider,
    ) -> Self {
        Self {
            terminal,
            events,
            theme,
            backdrop,
            files,
            failure: None,
            closed: false,
        }
    }

    /// `Ok(true)` when the event source ended while a dialog was open.
    pub fn finish(self) -> io::Result<bool> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.closed),
        }
    }

    fn run_modal<M: Modal>(&mut self, mut modal: M) -> M::Output {
        if self.failure.is_some() || self.closed {
            return modal.cancelled();
        }

        let theme = self.theme;
        let backdrop = self.backdrop;
        loop {
            let drawn = self.terminal.draw(|frame| {
                let screen = frame.area();
                frame.render_widget(Backdrop(backdrop), screen);
                modal.render(frame, screen, theme);
            });
            if let Err(err) = drawn {
                tracing::warn!(error = %err, "dialog draw failed");
                self.failure = Some(err);
                return modal.cancelled();
            }

            match self.events.next_event() {
                Ok(Some(event)) => {
                    if let Step::Done(output) = modal.handle(&event) {
                        return output;
                    }
                }
                Ok(None) => {
                    self.closed = true;
                    return modal.cancelled();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "dialog input failed");
                    self.failure = Some(err);
                    return modal.cancelled();
                }
            }
        }
    }
}

impl<B: Backend> Dialogs for TuiDialogs<'_, B> {
    fn ask_save_changes(&mut self, file_name: &str) -> SaveChoice {
        self.run_modal(SaveChangesModal::new(file_name))
    }

    fn ask_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let seed = start_dir.map(dir_seed).unwrap_or_default();
        self.run_modal(PathModal::new(" Open ", seed, self.files))
    }

    fn ask_save_path(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
        let seed = suggested
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.run_modal(PathModal::new(" Save As ", seed, self.files))
    }

    fn edit_font(&mut self, seed: FontDialogSeed) -> Option<FontStyle> {
        self.run_modal(FontModal::new(seed))
    }

    fn choose_theme(&mut self, themes: &[String], current: &str) -> Option<String> {
        self.run_modal(ThemeModal::new(themes, current))
    }

    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.run_modal(NoticeModal::new(kind, title, message))
    }
}

// ==================== shared pieces ====================

struct Palette {
    base: Style,
    selected: Style,
    border: Style,
    accent: Style,
    muted: Style,
}

impl Palette {
    fn new(theme: &UiTheme) -> Self {
        let base = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
        Self {
            base,
            selected: Style::default()
                .bg(theme.dialog_selected_bg)
                .fg(theme.dialog_selected_fg),
            border: base.fg(theme.dialog_border),
            accent: base.fg(theme.accent_fg),
            muted: base.fg(theme.muted_fg),
        }
    }

    fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.accent
        } else {
            self.border
        }
    }
}

/// Clears `area` and draws the dialog frame. Returns the content area.
fn draw_frame(frame: &mut Frame, area: Rect, title: &str, border: Style, palette: &Palette) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title.to_string(), border.add_modifier(Modifier::BOLD)))
        .style(palette.base);
    let content = block.inner(area);
    frame.render_widget(block, area);
    content
}

fn button_label(label: &str) -> String {
    format!("[ {label} ]")
}

/// Buttons centred on `row`.
fn button_rects(labels: &[&str], row: Rect) -> Vec<Rect> {
    let widths: Vec<u16> = labels
        .iter()
        .map(|l| button_label(l).width() as u16)
        .collect();
    let gaps = BUTTON_GAP * labels.len().saturating_sub(1) as u16;
    let total = widths.iter().sum::<u16>() + gaps;
    let mut x = row.x + row.width.saturating_sub(total) / 2;
    widths
        .into_iter()
        .map(|w| {
            let rect = Rect::new(x, row.y, w, 1).intersection(row);
            x = x.saturating_add(w + BUTTON_GAP);
            rect
        })
        .collect()
}

fn draw_buttons(
    frame: &mut Frame,
    labels: &[&str],
    rects: &[Rect],
    focused: Option<usize>,
    palette: &Palette,
) {
    for (idx, (label, rect)) in labels.iter().zip(rects).enumerate() {
        let style = if focused == Some(idx) {
            palette.selected.add_modifier(Modifier::BOLD)
        } else {
            palette.base
        };
        frame.render_widget(Paragraph::new(button_label(label)).style(style), *rect);
    }
}

/// Draws `items` in `area` with `selected` highlighted. Returns the index of
/// the first visible item.
fn draw_list(
    frame: &mut Frame,
    area: Rect,
    items: &[String],
    selected: usize,
    palette: &Palette,
) -> usize {
    let height = area.height as usize;
    let offset = list_offset(selected, height);
    let width = area.width as usize;
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(idx, item)| {
            let style = if idx == selected {
                palette.selected
            } else {
                palette.base
            };
            let text = format!(" {item}");
            let pad = width.saturating_sub(text.width());
            Line::from(Span::styled(format!("{text}{}", " ".repeat(pad)), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).style(palette.base), area);
    offset
}

/// Index of the list item drawn at row `y`.
fn list_hit(area: Rect, offset: usize, len: usize, x: u16, y: u16) -> Option<usize> {
    if !rect_contains(area, x, y) {
        return None;
    }
    let index = offset + (y - area.y) as usize;
    (index < len).then_some(index)
}

fn step_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

/// Next item after `current` whose text starts with `ch`, wrapping around.
fn jump_to_letter(items: &[String], current: usize, ch: char) -> Option<usize> {
    let ch = ch.to_lowercase().next()?;
    let len = items.len();
    (1..=len)
        .map(|step| (current + step) % len)
        .find(|&idx| {
            items[idx]
                .chars()
                .next()
                .and_then(|c| c.to_lowercase().next())
                == Some(ch)
        })
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        for range in wrap_line(line, width.max(1)) {
            out.push(
                line.chars()
                    .skip(range.start)
                    .take(range.end - range.start)
                    .collect::<String>()
                    .trim_end()
                    .to_string(),
            );
        }
    }
    out
}

// ==================== notice ====================

pub struct NoticeModal {
    kind: NoticeKind,
    title: String,
    message: String,
    button: Rect,
}

impl NoticeModal {
    pub fn new(kind: NoticeKind, title: &str, message: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.to_string(),
            button: Rect::default(),
        }
    }
}

impl Modal for NoticeModal {
    type Output = ();

    fn render(&mut self, frame: &mut Frame, screen: Rect, theme: &UiTheme) {
        let palette = Palette::new(theme);
        let longest = self
            .message
            .split('\n')
            .map(|l| l.width())
            .chain([self.title.width() + 2, 20])
            .max()
            .unwrap_or(20) as u16;
        let width = longest
            .saturating_add(4)
            .min(screen.width.saturating_sub(2).max(8));
        let text = wrap_text(&self.message, width.saturating_sub(4) as usize);
        let height = (text.len() as u16).saturating_add(4);
        let area = centered_box(width, height, screen);

        let border = match self.kind {
            NoticeKind::Error => palette.base.fg(theme.error_fg),
            NoticeKind::Info => palette.border,
        };
        let title = if self.title.is_empty() {
            String::new()
        } else {
            format!(" {} ", self.title)
        };
        let content = draw_frame(frame, area, &title, border, &palette);
        if content.height == 0 {
            return;
        }

        let text_area = Rect::new(
            content.x + 1,
            content.y,
            content.width.saturating_sub(2),
            content.height.saturating_sub(2),
        );
        let lines: Vec<Line> = text.into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(lines).style(palette.base), text_area);

        let row = Rect::new(content.x, content.bottom() - 1, content.width, 1);
        let rects = button_rects(&["OK"], row);
        self.button = rects.first().copied().unwrap_or_default();
        draw_buttons(frame, &["OK"], &rects, Some(0), &palette);
    }

    fn handle(&mut self, event: &InputEvent) -> Step<()> {
        if let Some(key) = event.key_press() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Step::Done(()),
                _ => Step::Continue,
            };
        }
        match event.left_click() {
            Some((x, y)) if rect_contains(self.button, x, y) => Step::Done(()),
            _ => Step::Continue,
        }
    }

    fn cancelled(&self) {}
}

// ==================== save changes ====================

const SAVE_BUTTONS: [&str; 3] = ["Save", "Do Not Save", "Cancel"];
const SAVE_CHOICES: [SaveChoice; 3] = [SaveChoice::Save, SaveChoice::Discard, SaveChoice::Cancel];

pub struct SaveChangesModal {
    file_name: String,
    focus: usize,
    buttons: Vec<Rect>,
}

impl SaveChangesModal {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            focus: 0,
            buttons: Vec::new(),
        }
    }
}

impl Modal for SaveChangesModal {
    type Output = SaveChoice;

    fn render(&mut self, frame: &mut Frame, screen: Rect, theme: &UiTheme) {
        let palette = Palette::new(theme);
        let message = format!("{} has unsaved changes.", self.file_name);
        let width = (message.width() as u16 + 4).clamp(40, screen.width.max(1));
        let area = centered_box(width, 6, screen);
        let content = draw_frame(frame, area, " Save File? ", palette.border, &palette);
        if content.height < 2 {
            return;
        }

        frame.render_widget(
            Paragraph::new(format!(" {message}")).style(palette.base),
            Rect::new(content.x, content.y, content.width, 1),
        );
        let row = Rect::new(content.x, content.bottom() - 1, content.width, 1);
        self.buttons = button_rects(&SAVE_BUTTONS, row);
        draw_buttons(frame, &SAVE_BUTTONS, &self.buttons, Some(self.focus), &palette);
    }

    fn handle(&mut self, event: &InputEvent) -> Step<SaveChoice> {
        if let Some(key) = event.key_press() {
            let count = SAVE_BUTTONS.len();
            match key.code {
                KeyCode::Tab | KeyCode::Right => self.focus = (self.focus + 1) % count,
                KeyCode::BackTab | KeyCode::Left => self.focus = (self.focus + count - 1) % count,
                KeyCode::Enter | KeyCode::Char(' ') => return Step::Done(SAVE_CHOICES[self.focus]),
                KeyCode::Esc => return Step::Done(SaveChoice::Cancel),
                KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                    's' => return Step::Done(SaveChoice::Save),
                    'd' | 'n' => return Step::Done(SaveChoice::Discard),
                    'c' => return Step::Done(SaveChoice::Cancel),
                    _ => {}
                },
                _ => {}
            }
            return Step::Continue;
        }

        if let Some((x, y)) = event.left_click() {
            if let Some(idx) = self.buttons.iter().position(|r| rect_contains(*r, x, y)) {
                return Step::Done(SAVE_CHOICES[idx]);
            }
        }
        Step::Continue
    }

    fn cancelled(&self) -> SaveChoice {
        SaveChoice::Cancel
    }
}

// ==================== path prompt ====================

/// Result of Tab completion in the path prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// Names still matching when the completion is ambiguous.
    pub candidates: Vec<String>,
}

fn is_separator(ch: char) -> bool {
    ch == '/' || ch == MAIN_SEPARATOR
}

fn dir_seed(dir: &Path) -> String {
    let mut seed = dir.display().to_string();
    if !seed.ends_with(is_separator) {
        seed.push(MAIN_SEPARATOR);
    }
    seed
}

/// Completes the last path component of `input` against the entries of its
/// directory. Dot entries are offered only when the typed prefix starts with
/// a dot.
pub fn complete_path(input: &str, files: &dyn FileProvider) -> Option<Completion> {
    let split = input.rfind(is_separator).map(|idx| idx + 1).unwrap_or(0);
    let (dir_part, prefix) = input.split_at(split);
    let dir = if dir_part.is_empty() {
        Path::new(".")
    } else {
        Path::new(dir_part)
    };

    let mut matches: Vec<(String, bool)> = files
        .read_dir(dir)
        .ok()?
        .into_iter()
        .filter(|e| e.name.starts_with(prefix))
        .filter(|e| prefix.starts_with('.') || !e.name.starts_with('.'))
        .map(|e| (e.name, e.is_dir))
        .collect();
    matches.sort();

    match matches.as_slice() {
        [] => None,
        [(name, is_dir)] => {
            let mut text = format!("{dir_part}{name}");
            if *is_dir {
                text.push(MAIN_SEPARATOR);
            }
            Some(Completion {
                text,
                candidates: Vec::new(),
            })
        }
        many => {
            let first = &many[0].0;
            let common = many.iter().fold(first.len(), |len, (name, _)| {
                first
                    .char_indices()
                    .zip(name.chars())
                    .take_while(|((idx, a), b)| *idx < len && a == b)
                    .last()
                    .map(|((idx, a), _)| idx + a.len_utf8())
                    .unwrap_or(0)
            });
            let candidates = many
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{name}{MAIN_SEPARATOR}")
                    } else {
                        name.clone()
                    }
                })
                .collect();
            Some(Completion {
                text: format!("{dir_part}{}", &first[..common]),
                candidates,
            })
        }
    }
}

pub struct PathModal<'f> {
    title: &'static str,
    input: LineInput,
    candidates: Vec<String>,
    message: Option<String>,
    files: &'f dyn FileProvider,
    buttons: Vec<Rect>,
}

impl<'f> PathModal<'f> {
    pub fn new(title: &'static str, seed: String, files: &'f dyn FileProvider) -> Self {
        Self {
            title,
            input: LineInput::new(seed),
            candidates: Vec::new(),
            message: None,
            files,
            buttons: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    fn complete(&mut self) {
        self.message = None;
        match complete_path(self.input.text(), self.files) {
            Some(completion) => {
                self.input.set(completion.text);
                self.candidates = completion.candidates;
            }
            None => {
                self.candidates.clear();
                self.message = Some("No matches".to_string());
            }
        }
    }

    fn confirm(&mut self) -> Step<Option<PathBuf>> {
        let text = self.input.text().trim();
        if text.is_empty() {
            self.message = Some("Enter a file name".to_string());
            return Step::Continue;
        }
        let path = PathBuf::from(text);
        if self.files.is_dir(&path) {
            self.input.set(dir_seed(&path));
            self.complete();
            if self.candidates.is_empty() {
                self.message = None;
            }
            return Step::Continue;
        }
        Step::Done(Some(path))
    }
}

impl Modal for PathModal<'_> {
    type Output = Option<PathBuf>;

    fn render(&mut self, frame: &mut Frame, screen: Rect, theme: &UiTheme) {
        let palette = Palette::new(theme);
        let width = screen.width.saturating_sub(4).min(72);
        let height = PATH_CANDIDATE_ROWS as u16 + 6;
        let area = centered_box(width, height, screen);
        let content = draw_frame(frame, area, self.title, palette.accent, &palette);
        if content.height < 3 || content.width < 4 {
            return;
        }

        let field = Rect::new(content.x + 1, content.y, content.width - 2, 1);
        let (range, cursor_x) = self.input.view(field.width as usize);
        frame.render_widget(
            Paragraph::new(&self.input.text()[range]).style(palette.selected),
            field,
        );
        frame.set_cursor_position(Position::new(field.x + cursor_x as u16, field.y));

        let list = Rect::new(
            content.x + 1,
            content.y + 1,
            content.width - 2,
            content.height.saturating_sub(3),
        );
        let mut lines: Vec<Line> = self
            .candidates
            .iter()
            .take(list.height as usize)
            .map(|c| Line::from(Span::styled(c.clone(), palette.base)))
            .collect();
        let hidden = self.candidates.len().saturating_sub(list.height as usize);
        if hidden > 0 {
            if let Some(last) = lines.last_mut() {
                *last = Line::from(Span::styled(format!("... {} more", hidden + 1), palette.muted));
            }
        }
        frame.render_widget(Paragraph::new(lines).style(palette.base), list);

        let hint = self
            .message
            .clone()
            .unwrap_or_else(|| "Tab completes, Enter confirms, Esc cancels".to_string());
        let hint_style = if self.message.is_some() {
            palette.base.fg(theme.error_fg)
        } else {
            palette.muted
        };
        frame.render_widget(
            Paragraph::new(hint).style(hint_style),
            Rect::new(content.x + 1, content.bottom() - 2, content.width - 2, 1),
        );

        let row = Rect::new(content.x, content.bottom() - 1, content.width, 1);
        self.buttons = button_rects(&["OK", "Cancel"], row);
        draw_buttons(frame, &["OK", "Cancel"], &self.buttons, None, &palette);
    }

    fn handle(&mut self, event: &InputEvent) -> Step<Option<PathBuf>> {
        if let InputEvent::Paste(text) = event {
            let first = text.lines().next().unwrap_or("");
            self.input.insert_str(first);
            return Step::Continue;
        }

        if let Some(key) = event.key_press() {
            match key.code {
                KeyCode::Esc => return Step::Done(None),
                KeyCode::Enter => return self.confirm(),
                KeyCode::Tab => self.complete(),
                _ => {
                    if self.input.handle_key(key) {
                        self.message = None;
                    }
                }
            }
            return Step::Continue;
        }

        if let Some((x, y)) = event.left_click() {
            match self.buttons.iter().position(|r| rect_contains(*r, x, y)) {
                Some(0) => return self.confirm(),
                Some(_) => return Step::Done(None),
                None => {}
            }
        }
        Step::Continue
    }

    fn cancelled(&self) -> Option<PathBuf> {
        None
    }
}

// ==================== font ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFocus {
    Family,
    Size,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Ok,
    Cancel,
}

impl FontFocus {
    const ORDER: [FontFocus; 8] = [
        FontFocus::Family,
        FontFocus::Size,
        FontFocus::Bold,
        FontFocus::Italic,
        FontFocus::Underline,
        FontFocus::Strikethrough,
        FontFocus::Ok,
        FontFocus::Cancel,
    ];

    fn cycle(self, delta: isize) -> Self {
        let len = Self::ORDER.len() as isize;
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ORDER[(idx + delta).rem_euclid(len) as usize]
    }

    fn flag(self) -> Option<usize> {
        match self {
            FontFocus::Bold => Some(0),
            FontFocus::Italic => Some(1),
            FontFocus::Underline => Some(2),
            FontFocus::Strikethrough => Some(3),
            _ => None,
        }
    }
}

const FLAG_LABELS: [&str; 4] = ["Bold", "Italic", "Underline", "Strikethrough"];
const FLAG_FOCUS: [FontFocus; 4] = [
    FontFocus::Bold,
    FontFocus::Italic,
    FontFocus::Underline,
    FontFocus::Strikethrough,
];

/// Screen areas of the font dialog from the last draw.
#[derive(Debug, Clone, Default)]
struct FontGeometry {
    families: Rect,
    family_offset: usize,
    sizes: Rect,
    size_offset: usize,
    checks: [Rect; 4],
    buttons: Vec<Rect>,
}

pub struct FontModal {
    families: Vec<String>,
    sizes: Vec<String>,
    size_values: Vec<u16>,
    family: usize,
    size: usize,
    flags: [bool; 4],
    focus: FontFocus,
    geometry: FontGeometry,
}

impl FontModal {
    pub fn new(seed: FontDialogSeed) -> Self {
        let style = seed.style;
        let mut families = seed.families;
        if families.is_empty() {
            families.push(style.family.clone());
        }
        let mut size_values = seed.sizes;
        if size_values.is_empty() {
            size_values.push(style.size);
        }

        let family = families.iter().position(|f| *f == style.family).unwrap_or(0);
        let size = size_values.iter().position(|s| *s == style.size).unwrap_or(0);
        Self {
            sizes: size_values.iter().map(u16::to_string).collect(),
            families,
            size_values,
            family,
            size,
            flags: [style.bold, style.italic, style.underline, style.strikethrough],
            focus: FontFocus::Family,
            geometry: FontGeometry::default(),
        }
    }

    pub fn focus(&self) -> FontFocus {
        self.focus
    }

    /// Style built from the current dialog state.
    pub fn style(&self) -> FontStyle {
        FontStyle {
            family: self.families[self.family].clone(),
            size: self.size_values[self.size],
            bold: self.flags[0],
            italic: self.flags[1],
            underline: self.flags[2],
            strikethrough: self.flags[3],
        }
    }

    fn move_list(&mut self, delta: isize) {
        match self.focus {
            FontFocus::Family => self.family = step_index(self.family, delta, self.families.len()),
            FontFocus::Size => self.size = step_index(self.size, delta, self.sizes.len()),
            _ => self.focus = self.focus.cycle(delta.signum()),
        }
    }

    fn page(&self) -> isize {
        let rect = match self.focus {
            FontFocus::Size => self.geometry.sizes,
            _ => self.geometry.families,
        };
        rect.height.max(1) as isize
    }

    fn activate(&mut self) -> Step<Option<FontStyle>> {
        match self.focus {
            FontFocus::Cancel => Step::Done(None),
            _ => Step::Done(Some(self.style())),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Step<Option<FontStyle>> {
        match key.code {
            KeyCode::Esc => return Step::Done(None),
            KeyCode::Enter => return self.activate(),
            KeyCode::Tab => self.focus = self.focus.cycle(1),
            KeyCode::BackTab => self.focus = self.focus.cycle(-1),
            KeyCode::Up => self.move_list(-1),
            KeyCode::Down => self.move_list(1),
            KeyCode::PageUp => self.move_list(-self.page()),
            KeyCode::PageDown => self.move_list(self.page()),
            KeyCode::Home => match self.focus {
                FontFocus::Family => self.family = 0,
                FontFocus::Size => self.size = 0,
                _ => {}
            },
            KeyCode::End => match self.focus {
                FontFocus::Family => self.family = self.families.len().saturating_sub(1),
                FontFocus::Size => self.size = self.sizes.len().saturating_sub(1),
                _ => {}
            },
            KeyCode::Char(' ') => match self.focus {
                FontFocus::Ok | FontFocus::Cancel => return self.activate(),
                focus => {
                    if let Some(flag) = focus.flag() {
                        self.flags[flag] = !self.flags[flag];
                    }
                }
            },
            KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                match self.focus {
                    FontFocus::Family => {
                        if let Some(idx) = jump_to_letter(&self.families, self.family, ch) {
                            self.family = idx;
                        }
                    }
                    FontFocus::Size => {
                        if let Some(idx) = jump_to_letter(&self.sizes, self.size, ch) {
                            self.size = idx;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        Step::Continue
    }

    fn handle_mouse(&mut self, event: &InputEvent) -> Step<Option<FontStyle>> {
        let geo = &self.geometry;
        if let Some((delta, x, y)) = event.wheel() {
            if rect_contains(geo.families, x, y) {
                self.family = step_index(self.family, delta, self.families.len());
            } else if rect_contains(geo.sizes, x, y) {
                self.size = step_index(self.size, delta, self.sizes.len());
            }
            return Step::Continue;
        }

        let Some((x, y)) = event.left_click() else {
            return Step::Continue;
        };
        if let Some(idx) = list_hit(geo.families, geo.family_offset, self.families.len(), x, y) {
            self.family = idx;
            self.focus = FontFocus::Family;
        } else if let Some(idx) = list_hit(geo.sizes, geo.size_offset, self.sizes.len(), x, y) {
            self.size = idx;
            self.focus = FontFocus::Size;
        } else if let Some(flag) = geo.checks.iter().position(|r| rect_contains(*r, x, y)) {
            self.flags[flag] = !self.flags[flag];
            self.focus = FLAG_FOCUS[flag];
        } else if let Some(button) = geo.buttons.iter().position(|r| rect_contains(*r, x, y)) {
            self.focus = if button == 0 {
                FontFocus::Ok
            } else {
                FontFocus::Cancel
            };
            return self.activate();
        }
        Step::Continue
    }
}

impl Modal for FontModal {
    type Output = Option<FontStyle>;

    fn render(&mut self, frame: &mut Frame, screen: Rect, theme: &UiTheme) {
        let palette = Palette::new(theme);
        let area = centered_box(64, 20, screen);
        let content = draw_frame(frame, area, " Font ", palette.border, &palette);
        if content.height < 6 || content.width < 20 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(content);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(16),
                Constraint::Length(10),
                Constraint::Length(20),
            ])
            .split(rows[0]);

        let style = self.style();

        let family_block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_for(self.focus == FontFocus::Family))
            .title(format!(" Font Style: {} ", style.family))
            .style(palette.base);
        let families = family_block.inner(columns[0]);
        frame.render_widget(family_block, columns[0]);
        self.geometry.family_offset = draw_list(frame, families, &self.families, self.family, &palette);
        self.geometry.families = families;

        let size_block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_for(self.focus == FontFocus::Size))
            .title(format!(" Size: {} ", style.size))
            .style(palette.base);
        let sizes = size_block.inner(columns[1]);
        frame.render_widget(size_block, columns[1]);
        self.geometry.size_offset = draw_list(frame, sizes, &self.sizes, self.size, &palette);
        self.geometry.sizes = sizes;

        let checks = inner(columns[2]);
        for (idx, label) in FLAG_LABELS.iter().enumerate() {
            let rect = Rect::new(checks.x, checks.y + idx as u16, checks.width, 1).intersection(checks);
            let mark = if self.flags[idx] { 'x' } else { ' ' };
            let mut label_style = palette.base.add_modifier(match idx {
                0 => Modifier::BOLD,
                1 => Modifier::ITALIC,
                2 => Modifier::UNDERLINED,
                _ => Modifier::CROSSED_OUT,
            });
            if self.focus == FLAG_FOCUS[idx] {
                label_style = label_style.patch(palette.selected);
            }
            let line = Line::from(vec![
                Span::styled(format!("[{mark}] "), palette.base),
                Span::styled(*label, label_style),
            ]);
            frame.render_widget(Paragraph::new(line), rect);
            self.geometry.checks[idx] = rect;
        }

        let preview_style = palette.base.add_modifier(style_modifiers(&style));
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Preview: ", palette.muted),
                Span::styled(PREVIEW_TEXT, preview_style),
            ])),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(format!(" {}", style.descriptor())).style(palette.muted),
            rows[2],
        );

        self.geometry.buttons = button_rects(&["OK", "Cancel"], rows[3]);
        let focused = match self.focus {
            FontFocus::Ok => Some(0),
            FontFocus::Cancel => Some(1),
            _ => None,
        };
        draw_buttons(frame, &["OK", "Cancel"], &self.geometry.buttons, focused, &palette);
    }

    fn handle(&mut self, event: &InputEvent) -> Step<Option<FontStyle>> {
        match event.key_press() {
            Some(key) => self.handle_key(key),
            None => self.handle_mouse(event),
        }
    }

    fn cancelled(&self) -> Option<FontStyle> {
        None
    }
}

// ==================== theme ====================

pub struct ThemeModal {
    themes: Vec<String>,
    selected: usize,
    list: Rect,
    offset: usize,
    buttons: Vec<Rect>,
}

impl ThemeModal {
    pub fn new(themes: &[String], current: &str) -> Self {
        Self {
            selected: themes.iter().position(|t| t == current).unwrap_or(0),
            themes: themes.to_vec(),
            list: Rect::default(),
            offset: 0,
            buttons: Vec::new(),
        }
    }

    fn confirm(&self) -> Step<Option<String>> {
        Step::Done(self.themes.get(self.selected).cloned())
    }
}

impl Modal for ThemeModal {
    type Output = Option<String>;

    fn render(&mut self, frame: &mut Frame, screen: Rect, theme: &UiTheme) {
        let palette = Palette::new(theme);
        let widest = self.themes.iter().map(|t| t.width()).max().unwrap_or(0) as u16;
        let width = widest.saturating_add(6).max(30);
        let rows = (self.themes.len() as u16).clamp(1, 12);
        let area = centered_box(width, rows + 4, screen);
        let content = draw_frame(frame, area, " Choose Theme ", palette.border, &palette);
        if content.height < 3 {
            return;
        }

        self.list = Rect::new(content.x, content.y, content.width, content.height - 2);
        self.offset = draw_list(frame, self.list, &self.themes, self.selected, &palette);

        let row = Rect::new(content.x, content.bottom() - 1, content.width, 1);
        self.buttons = button_rects(&["OK", "Cancel"], row);
        draw_buttons(frame, &["OK", "Cancel"], &self.buttons, None, &palette);
    }

    fn handle(&mut self, event: &InputEvent) -> Step<Option<String>> {
        let len = self.themes.len();
        if let Some(key) = event.key_press() {
            let page = self.list.height.max(1) as isize;
            match key.code {
                KeyCode::Esc => return Step::Done(None),
                KeyCode::Enter => return self.confirm(),
                KeyCode::Up => self.selected = step_index(self.selected, -1, len),
                KeyCode::Down => self.selected = step_index(self.selected, 1, len),
                KeyCode::PageUp => self.selected = step_index(self.selected, -page, len),
                KeyCode::PageDown => self.selected = step_index(self.selected, page, len),
                KeyCode::Home => self.selected = 0,
                KeyCode::End => self.selected = len.saturating_sub(1),
                KeyCode::Char(ch) => {
                    if let Some(idx) = jump_to_letter(&self.themes, self.selected, ch) {
                        self.selected = idx;
                    }
                }
                _ => {}
            }
            return Step::Continue;
        }

        if let Some((delta, x, y)) = event.wheel() {
            if rect_contains(self.list, x, y) {
                self.selected = step_index(self.selected, delta, len);
            }
            return Step::Continue;
        }

        if let Some((x, y)) = event.left_click() {
            if let Some(idx) = list_hit(self.list, self.offset, len, x, y) {
                self.selected = idx;
            } else {
                match self.buttons.iter().position(|r| rect_contains(*r, x, y)) {
                    Some(0) => return self.confirm(),
                    Some(_) => return Step::Done(None),
                    None => {}
                }
            }
        }
        Step::Continue
    }

    fn cancelled(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/dialogs.rs"]
mod tests;
