//! Keyboard shortcuts: key → command.

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use rustc_hash::FxHashMap;

pub struct Keymap {
    bindings: FxHashMap<Key, Command>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn empty() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut keymap = Self::empty();

        // ==================== File ====================
        keymap.bind(Key::ctrl(KeyCode::Char('n')), Command::New);
        keymap.bind(Key::ctrl(KeyCode::Char('o')), Command::Open);
        keymap.bind(Key::ctrl(KeyCode::Char('s')), Command::Save);
        keymap.bind(Key::ctrl_shift(KeyCode::Char('s')), Command::SaveAs);
        keymap.bind(Key::ctrl(KeyCode::Char('q')), Command::Exit);

        // ==================== Edit ====================
        keymap.bind(Key::ctrl(KeyCode::Char('c')), Command::Copy);
        keymap.bind(Key::ctrl(KeyCode::Char('v')), Command::Paste);
        keymap.bind(Key::ctrl(KeyCode::Char('a')), Command::SelectAll);

        // ==================== Format ====================
        keymap.bind(Key::ctrl(KeyCode::Char('t')), Command::Font);
        keymap.bind(Key::ctrl(KeyCode::Char('w')), Command::WordWrap);

        // ==================== Help ====================
        keymap.bind(Key::simple(KeyCode::F(1)), Command::AskForHelp);

        keymap
    }

    pub fn get(&self, key: &Key) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn keys_for_command(&self, command: Command) -> Vec<Key> {
        self.bindings
            .iter()
            .filter(|(_, cmd)| **cmd == command)
            .map(|(key, _)| *key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/keymap.rs"]
mod tests;
