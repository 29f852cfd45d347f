//! The main window: menu bar, body view and status bar.
//!
//! A `Window` holds only view state (theme, open menu, scroll offsets and
//! the geometry of the last frame). Changing the theme drops it and builds a
//! new one; everything the user edits lives in the `Session`.

use super::keymap::Keymap;
use super::layout::{BodyLayout, Viewport};
use super::menu::{item_at, title_at, MenuResponse, MenuState};
use super::theme::UiTheme;
use super::util::rect_contains;
use crate::core::command::{menu_by_mnemonic, menu_index};
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::core::Command;
use crate::kernel::Session;
use ratatui::layout::Rect;

pub(super) const MENU_BAR_HEIGHT: u16 = 1;
pub(super) const STATUS_HEIGHT: u16 = 1;
const WHEEL_ROWS: isize = 3;
const WHEEL_COLS: isize = 4;

pub struct Window {
    pub(super) theme: UiTheme,
    pub(super) menu: MenuState,
    keymap: Keymap,
    tab_text: String,
    pub(super) viewport: Viewport,
    /// Scroll the cursor into view on the next frame.
    pub(super) follow_cursor: bool,
    dragging: bool,

    pub(super) last_menu_bar: Rect,
    pub(super) last_body_inner: Rect,
    pub(super) last_menu_popup: Option<Rect>,
}

impl Window {
    pub fn new(theme: UiTheme, tab_text: String) -> Self {
        Self {
            theme,
            menu: MenuState::new(),
            keymap: Keymap::new(),
            tab_text,
            viewport: Viewport::default(),
            follow_cursor: true,
            dragging: false,
            last_menu_bar: Rect::default(),
            last_body_inner: Rect::default(),
            last_menu_popup: None,
        }
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn reveal_cursor(&mut self) {
        self.follow_cursor = true;
    }

    /// Applies `event` to the window and the body. Returns the command to run,
    /// if the event selected one.
    pub fn handle_event(&mut self, event: &InputEvent, session: &mut Session) -> Option<Command> {
        if let Some(key) = event.key_press() {
            return self.handle_key(key, session);
        }
        match event {
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse, session),
            InputEvent::Paste(text) => {
                if self.menu.is_open() {
                    return None;
                }
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                session.body.replace_selection(&text);
                self.follow_cursor = true;
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, session: &mut Session) -> Option<Command> {
        if self.menu.is_open() {
            return match self.menu.handle_key(event) {
                MenuResponse::Run(command) => Some(command),
                MenuResponse::Consumed => None,
            };
        }

        let key = Key::from(*event);
        if key == Key::simple(KeyCode::F(10)) {
            self.menu.open_bar(0);
            return None;
        }
        if let Some(menu) = key.alt_char().and_then(menu_by_mnemonic) {
            self.menu.open_bar(menu_index(menu.id));
            return None;
        }

        if let Some(command) = self.keymap.get(&key) {
            return Some(command);
        }

        self.edit_body(event, session);
        None
    }

    fn edit_body(&mut self, event: &KeyEvent, session: &mut Session) {
        let body = &mut session.body;
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = event.modifiers.contains(KeyModifiers::ALT);
        let page = self.last_body_inner.height.max(1) as isize;

        match event.code {
            KeyCode::Char(ch) if !ctrl && !alt => body.insert_char(ch),
            KeyCode::Enter => body.replace_selection("\n"),
            KeyCode::Tab => body.replace_selection(&self.tab_text),
            KeyCode::Backspace => {
                body.backspace();
            }
            KeyCode::Delete => {
                body.delete_forward();
            }
            KeyCode::Left => body.move_left(shift),
            KeyCode::Right => body.move_right(shift),
            KeyCode::Up => body.move_up(shift),
            KeyCode::Down => body.move_down(shift),
            KeyCode::Home if ctrl => body.move_doc_start(shift),
            KeyCode::End if ctrl => body.move_doc_end(shift),
            KeyCode::Home => body.move_line_start(shift),
            KeyCode::End => body.move_line_end(shift),
            KeyCode::PageUp => body.move_lines(-page, shift),
            KeyCode::PageDown => body.move_lines(page, shift),
            KeyCode::Esc => body.clear_selection(),
            _ => return,
        }
        self.follow_cursor = true;
    }

    fn handle_mouse(&mut self, event: &MouseEvent, session: &mut Session) -> Option<Command> {
        let (x, y) = (event.column, event.row);

        if self.menu.is_open() {
            return self.handle_menu_mouse(event);
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = title_at(self.last_menu_bar, x, y) {
                    self.menu.open_bar(index);
                    return None;
                }
                if rect_contains(self.last_body_inner, x, y) {
                    let extend = event.modifiers.contains(KeyModifiers::SHIFT);
                    let pos = self.hit_position(session, x, y);
                    session.body.set_cursor(pos, extend);
                    self.dragging = true;
                    self.follow_cursor = true;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                let inner = self.last_body_inner;
                if inner.height == 0 || inner.width == 0 {
                    return None;
                }
                let total = BodyLayout::new(&session.body, inner.width as usize, session.word_wrap)
                    .len();
                if y < inner.y {
                    self.viewport.scroll_rows(-1, total, inner.height as usize);
                } else if y >= inner.y + inner.height {
                    self.viewport.scroll_rows(1, total, inner.height as usize);
                }
                let cx = x.clamp(inner.x, inner.x + inner.width - 1);
                let cy = y.clamp(inner.y, inner.y + inner.height - 1);
                let pos = self.hit_position(session, cx, cy);
                session.body.set_cursor(pos, true);
                self.follow_cursor = true;
            }
            MouseEventKind::Up(MouseButton::Left) => self.dragging = false,
            MouseEventKind::Down(MouseButton::Right) => {
                if rect_contains(self.last_body_inner, x, y) {
                    self.menu.open_context(x, y);
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let inner = self.last_body_inner;
                let total = BodyLayout::new(&session.body, inner.width as usize, session.word_wrap)
                    .len();
                let delta = if event.kind == MouseEventKind::ScrollUp {
                    -WHEEL_ROWS
                } else {
                    WHEEL_ROWS
                };
                self.viewport
                    .scroll_rows(delta, total, inner.height as usize);
                self.follow_cursor = false;
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight if !session.word_wrap => {
                let delta = if event.kind == MouseEventKind::ScrollLeft {
                    -WHEEL_COLS
                } else {
                    WHEEL_COLS
                };
                self.viewport.scroll_cols(delta);
                self.follow_cursor = false;
            }
            _ => {}
        }
        None
    }

    fn handle_menu_mouse(&mut self, event: &MouseEvent) -> Option<Command> {
        let (x, y) = (event.column, event.row);
        let popup = self.last_menu_popup;
        let hovered = popup.and_then(|area| item_at(area, self.menu.items().len(), x, y));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = hovered {
                    if let MenuResponse::Run(command) = self.menu.activate(index) {
                        return Some(command);
                    }
                    return None;
                }
                if popup.is_some_and(|area| rect_contains(area, x, y)) {
                    return None;
                }
                match title_at(self.last_menu_bar, x, y) {
                    Some(index) if !self.is_bar_menu_open(index) => self.menu.open_bar(index),
                    _ => self.menu.close(),
                }
            }
            MouseEventKind::Down(_) => self.menu.close(),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some(index) = hovered {
                    self.menu.select(index);
                }
            }
            _ => {}
        }
        None
    }

    fn is_bar_menu_open(&self, index: usize) -> bool {
        matches!(
            self.menu.open(),
            Some(super::menu::OpenMenu::Bar { menu, .. }) if menu == index
        )
    }

    /// Buffer position drawn at screen cell (`x`, `y`) of the body.
    fn hit_position(&self, session: &Session, x: u16, y: u16) -> usize {
        let inner = self.last_body_inner;
        let layout = BodyLayout::new(&session.body, inner.width as usize, session.word_wrap);
        let row = self.viewport.top + y.saturating_sub(inner.y) as usize;
        let mut col = x.saturating_sub(inner.x) as usize;
        if !session.word_wrap {
            col += self.viewport.left;
        }
        layout.position_at(&session.body, row, col)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/window.rs"]
mod tests;
