//! Menu bar and context menu: open state, keyboard navigation and geometry.

use crate::core::command::{menu_by_mnemonic, menu_index, MENU_BAR};
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::core::{Command, CONTEXT_MENU};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Gap between an item label and its shortcut hint.
const HINT_GAP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMenu {
    /// Dropdown of `MENU_BAR[menu]`.
    Bar { menu: usize, item: usize },
    /// Right-click menu anchored at a screen cell.
    Context { x: u16, y: u16, item: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuResponse {
    Consumed,
    Run(Command),
}

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    open: Option<OpenMenu>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> Option<OpenMenu> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_bar(&mut self, menu: usize) {
        let menu = menu.min(MENU_BAR.len() - 1);
        self.open = Some(OpenMenu::Bar { menu, item: 0 });
    }

    pub fn open_context(&mut self, x: u16, y: u16) {
        self.open = Some(OpenMenu::Context { x, y, item: 0 });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Items of the open menu.
    pub fn items(&self) -> &'static [Command] {
        match self.open {
            Some(OpenMenu::Bar { menu, .. }) => MENU_BAR[menu].items,
            Some(OpenMenu::Context { .. }) => CONTEXT_MENU,
            None => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self.open? {
            OpenMenu::Bar { item, .. } | OpenMenu::Context { item, .. } => Some(item),
        }
    }

    pub fn select(&mut self, index: usize) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        if let Some(OpenMenu::Bar { item, .. } | OpenMenu::Context { item, .. }) = &mut self.open
        {
            *item = index.min(len - 1);
        }
    }

    /// Runs the item at `index` and closes the menu.
    pub fn activate(&mut self, index: usize) -> MenuResponse {
        let command = self.items().get(index).copied();
        self.close();
        match command {
            Some(command) => MenuResponse::Run(command),
            None => MenuResponse::Consumed,
        }
    }

    /// Keys while a menu is open. Every key is consumed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> MenuResponse {
        let Some(open) = self.open else {
            return MenuResponse::Consumed;
        };
        let len = self.items().len();
        let current = self.selected().unwrap_or(0);

        match event.code {
            KeyCode::Esc | KeyCode::F(10) => self.close(),
            KeyCode::Up => self.select((current + len - 1) % len.max(1)),
            KeyCode::Down | KeyCode::Tab => self.select((current + 1) % len.max(1)),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(len.saturating_sub(1)),
            KeyCode::Left | KeyCode::Right => {
                if let OpenMenu::Bar { menu, .. } = open {
                    let count = MENU_BAR.len();
                    let next = if event.code == KeyCode::Left {
                        (menu + count - 1) % count
                    } else {
                        (menu + 1) % count
                    };
                    self.open_bar(next);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => return self.activate(current),
            KeyCode::Char(ch) if event.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(menu) = menu_by_mnemonic(ch) {
                    self.open_bar(menu_index(menu.id));
                }
            }
            KeyCode::Char(ch) => {
                let ch = ch.to_ascii_lowercase();
                let hit = self.items().iter().position(|cmd| {
                    cmd.label()
                        .chars()
                        .next()
                        .is_some_and(|c| c.to_ascii_lowercase() == ch)
                });
                if let Some(index) = hit {
                    return self.activate(index);
                }
            }
            _ => {}
        }
        MenuResponse::Consumed
    }
}

/// Title cells of the menu bar, in `MENU_BAR` order.
pub fn title_rects(bar: Rect) -> Vec<Rect> {
    let mut x = bar.x;
    let right = bar.x.saturating_add(bar.width);
    MENU_BAR
        .iter()
        .map(|menu| {
            let width = (menu.title.width() as u16).saturating_add(2);
            let rect = Rect::new(x.min(right), bar.y, width.min(right.saturating_sub(x)), 1);
            x = x.saturating_add(width);
            rect
        })
        .collect()
}

pub fn title_at(bar: Rect, x: u16, y: u16) -> Option<usize> {
    if y != bar.y {
        return None;
    }
    title_rects(bar)
        .iter()
        .position(|r| r.width > 0 && x >= r.x && x < r.x + r.width)
}

/// Inner width needed to show `items` with their shortcut hints.
pub fn items_width(items: &[Command]) -> usize {
    items
        .iter()
        .map(|cmd| {
            let hint = cmd.shortcut_hint().map(|h| h.width() + HINT_GAP).unwrap_or(0);
            cmd.label().width() + hint
        })
        .max()
        .unwrap_or(0)
}

/// Item text padded to `width`: label on the left, hint on the right.
pub fn item_text(command: Command, width: usize) -> String {
    let label = command.label();
    let hint = command.shortcut_hint().unwrap_or("");
    let pad = width.saturating_sub(label.width() + hint.width()).max(1);
    format!("{label}{}{hint}", " ".repeat(pad))
}

/// Bordered popup of `items` at (`x`, `y`), shifted to stay on `screen`.
pub fn popup_rect(x: u16, y: u16, items: &[Command], screen: Rect) -> Rect {
    let width = (items_width(items) as u16)
        .saturating_add(4)
        .min(screen.width);
    let height = (items.len() as u16).saturating_add(2).min(screen.height);

    let right = screen.x.saturating_add(screen.width);
    let bottom = screen.y.saturating_add(screen.height);
    let mut x = x.max(screen.x);
    let mut y = y.max(screen.y);
    if x.saturating_add(width) > right {
        x = right.saturating_sub(width);
    }
    if y.saturating_add(height) > bottom {
        y = bottom.saturating_sub(height);
    }
    Rect::new(x, y, width, height)
}

/// Where the open menu is drawn.
pub fn open_menu_rect(open: OpenMenu, bar: Rect, screen: Rect) -> Rect {
    match open {
        OpenMenu::Bar { menu, .. } => {
            let title = title_rects(bar).get(menu).copied().unwrap_or(bar);
            popup_rect(title.x, bar.y.saturating_add(1), MENU_BAR[menu].items, screen)
        }
        OpenMenu::Context { x, y, .. } => popup_rect(x, y, CONTEXT_MENU, screen),
    }
}

/// Item index under (`x`, `y`) in a popup drawn at `area`.
pub fn item_at(area: Rect, len: usize, x: u16, y: u16) -> Option<usize> {
    let inside = x > area.x
        && x + 1 < area.x + area.width
        && y > area.y
        && y + 1 < area.y + area.height;
    if !inside {
        return None;
    }
    let index = (y - area.y - 1) as usize;
    (index < len).then_some(index)
}

#[cfg(test)]
#[path = "../../tests/unit/app/menu.rs"]
mod tests;
