use super::*;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_ctrl_shift_chord() {
    let key = Key::ctrl_shift(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
}

#[test]
fn test_key_from_event_normalizes_uppercase() {
    let event = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL);
    let key: Key = event.into();
    assert_eq!(key, Key::ctrl_shift(KeyCode::Char('s')));

    let enter: Key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE).into();
    assert_eq!(enter, Key::simple(KeyCode::Enter));
}

#[test]
fn test_alt_char_only_for_plain_alt() {
    assert_eq!(Key::new(KeyCode::Char('f'), KeyModifiers::ALT).alt_char(), Some('f'));
    assert_eq!(Key::ctrl(KeyCode::Char('f')).alt_char(), None);
    assert_eq!(
        Key::new(KeyCode::Char('f'), KeyModifiers::ALT | KeyModifiers::CONTROL).alt_char(),
        None
    );
}

#[test]
fn test_terminal_events_convert_and_focus_is_dropped() {
    use crossterm::event::Event;

    let key_event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    let input = InputEvent::from_terminal(Event::Key(key_event)).unwrap();
    assert_eq!(input.key_press(), Some(&key_event));

    assert_eq!(
        InputEvent::from_terminal(Event::Paste("hi".to_string())),
        Some(InputEvent::Paste("hi".to_string()))
    );
    assert_eq!(
        InputEvent::from_terminal(Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
    assert_eq!(InputEvent::from_terminal(Event::FocusGained), None);
    assert_eq!(InputEvent::from_terminal(Event::FocusLost), None);
}

#[test]
fn test_key_release_is_not_a_press() {
    let mut key_event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    key_event.kind = KeyEventKind::Release;
    assert!(InputEvent::Key(key_event).key_press().is_none());
}

#[test]
fn test_mouse_helpers() {
    let down = mouse(MouseEventKind::Down(MouseButton::Left), 3, 4);
    assert_eq!(down.left_click(), Some((3, 4)));
    assert_eq!(down.wheel(), None);

    let right = mouse(MouseEventKind::Down(MouseButton::Right), 3, 4);
    assert_eq!(right.left_click(), None);

    assert_eq!(mouse(MouseEventKind::ScrollUp, 1, 2).wheel(), Some((-1, 1, 2)));
    assert_eq!(mouse(MouseEventKind::ScrollDown, 1, 2).wheel(), Some((1, 1, 2)));
    assert_eq!(InputEvent::Paste(String::new()).wheel(), None);
}
