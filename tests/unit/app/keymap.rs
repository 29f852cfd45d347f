use super::*;
use crate::core::event::{KeyEvent, KeyModifiers};

#[test]
fn test_default_bindings() {
    let keymap = Keymap::new();
    assert_eq!(keymap.get(&Key::ctrl(KeyCode::Char('n'))), Some(Command::New));
    assert_eq!(keymap.get(&Key::simple(KeyCode::F(1))), Some(Command::AskForHelp));
    assert_eq!(keymap.get(&Key::simple(KeyCode::Char('n'))), None);
    assert_eq!(keymap.len(), 11);
}

#[test]
fn test_shifted_letter_resolves_to_save_as() {
    let keymap = Keymap::new();
    let event = KeyEvent::new(
        KeyCode::Char('S'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    );
    assert_eq!(keymap.get(&Key::from(event)), Some(Command::SaveAs));

    let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(keymap.get(&Key::from(event)), Some(Command::Save));
}

#[test]
fn test_every_hint_is_bound() {
    let keymap = Keymap::new();
    for command in Command::ALL {
        let bound = !keymap.keys_for_command(command).is_empty();
        assert_eq!(bound, command.shortcut_hint().is_some(), "{command:?}");
    }
}

#[test]
fn test_custom_binding() {
    let mut keymap = Keymap::empty();
    assert!(keymap.is_empty());
    keymap.bind(Key::new(KeyCode::Char('x'), KeyModifiers::ALT), Command::Exit);
    assert_eq!(keymap.get(&Key::new(KeyCode::Char('x'), KeyModifiers::ALT)), Some(Command::Exit));
}
