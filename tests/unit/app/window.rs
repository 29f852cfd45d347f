use super::*;
use crate::app::menu::OpenMenu;
use crate::core::event::KeyEventKind;
use crate::kernel::services::ports::config::EditorConfig;
use crate::kernel::TextBody;

fn session_with(text: &str) -> Session {
    let mut session = Session::new(&EditorConfig::default());
    session.body = TextBody::from_text(text);
    session
}

fn window() -> Window {
    let mut window = Window::new(UiTheme::default(), "    ".to_string());
    window.last_menu_bar = Rect::new(0, 0, 40, 1);
    window.last_body_inner = Rect::new(1, 2, 20, 5);
    window
}

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, modifiers))
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn typing_edits_the_body() {
    let mut window = window();
    let mut session = session_with("");

    for ch in "hi".chars() {
        assert_eq!(window.handle_event(&key(KeyCode::Char(ch)), &mut session), None);
    }
    window.handle_event(&key(KeyCode::Enter), &mut session);
    window.handle_event(&key(KeyCode::Tab), &mut session);
    assert_eq!(session.body.text(), "hi\n    ");

    window.handle_event(&key(KeyCode::Backspace), &mut session);
    assert_eq!(session.body.text(), "hi\n   ");
}

#[test]
fn key_release_is_ignored() {
    let mut window = window();
    let mut session = session_with("");
    let mut event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    event.kind = KeyEventKind::Release;

    window.handle_event(&InputEvent::Key(event), &mut session);
    assert!(session.body.is_empty());
}

#[test]
fn shortcuts_resolve_to_commands() {
    let mut window = window();
    let mut session = session_with("abc");

    let save = key_with(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(window.handle_event(&save, &mut session), Some(Command::Save));

    let help = key(KeyCode::F(1));
    assert_eq!(window.handle_event(&help, &mut session), Some(Command::AskForHelp));
    assert_eq!(session.body.text(), "abc");
}

#[test]
fn shift_arrows_extend_the_selection() {
    let mut window = window();
    let mut session = session_with("hello");
    session.body.set_cursor(0, false);

    for _ in 0..3 {
        window.handle_event(&key_with(KeyCode::Right, KeyModifiers::SHIFT), &mut session);
    }
    assert_eq!(session.body.selected_text().as_deref(), Some("hel"));

    window.handle_event(&key(KeyCode::Esc), &mut session);
    assert!(!session.body.has_selection());
}

#[test]
fn f10_opens_the_menu_bar_and_keys_navigate_it() {
    let mut window = window();
    let mut session = session_with("");

    window.handle_event(&key(KeyCode::F(10)), &mut session);
    assert_eq!(window.menu().open(), Some(OpenMenu::Bar { menu: 0, item: 0 }));

    window.handle_event(&key(KeyCode::Down), &mut session);
    window.handle_event(&key(KeyCode::Down), &mut session);
    let ran = window.handle_event(&key(KeyCode::Enter), &mut session);
    assert_eq!(ran, Some(Command::Save));
    assert!(!window.menu().is_open());
}

#[test]
fn keys_do_not_reach_the_body_while_a_menu_is_open() {
    let mut window = window();
    let mut session = session_with("");

    window.handle_event(&key(KeyCode::F(10)), &mut session);
    window.handle_event(&key(KeyCode::Char('z')), &mut session);
    assert!(session.body.is_empty());
    assert!(window.menu().is_open());

    window.handle_event(&key(KeyCode::Esc), &mut session);
    assert!(!window.menu().is_open());
}

#[test]
fn alt_mnemonic_opens_its_menu() {
    let mut window = window();
    let mut session = session_with("");

    window.handle_event(&key_with(KeyCode::Char('o'), KeyModifiers::ALT), &mut session);
    assert_eq!(window.menu().open(), Some(OpenMenu::Bar { menu: 2, item: 0 }));

    let ran = window.handle_event(&key(KeyCode::Char('w')), &mut session);
    assert_eq!(ran, Some(Command::WordWrap));
}

#[test]
fn paste_event_normalizes_line_breaks() {
    let mut window = window();
    let mut session = session_with("");

    window.handle_event(&InputEvent::Paste("a\r\nb\rc".to_string()), &mut session);
    assert_eq!(session.body.text(), "a\nb\nc");
}

#[test]
fn click_in_body_moves_the_cursor() {
    let mut window = window();
    let mut session = session_with("first\nsecond");
    session.word_wrap = false;

    window.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 3), &mut session);
    assert_eq!(session.body.cursor_line_col(), (1, 3));

    // Past the end of the line lands on its end.
    window.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 18, 2), &mut session);
    assert_eq!(session.body.cursor_line_col(), (0, 5));
}

#[test]
fn drag_selects_text() {
    let mut window = window();
    let mut session = session_with("hello world");

    window.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 2), &mut session);
    window.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 6, 2), &mut session);
    window.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 6, 2), &mut session);
    assert_eq!(session.body.selected_text().as_deref(), Some("hello"));

    // Moving without a pressed button after release selects nothing new.
    window.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 2), &mut session);
    assert_eq!(session.body.selected_text().as_deref(), Some("hello"));
}

#[test]
fn clicking_a_title_opens_that_menu() {
    let mut window = window();
    let mut session = session_with("");

    // " File " spans columns 0..6, " Edit " 6..12.
    window.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 7, 0), &mut session);
    assert_eq!(window.menu().open(), Some(OpenMenu::Bar { menu: 1, item: 0 }));
}

#[test]
fn right_click_in_body_opens_the_context_menu() {
    let mut window = window();
    let mut session = session_with("text");

    window.handle_event(&mouse(MouseEventKind::Down(MouseButton::Right), 5, 3), &mut session);
    assert_eq!(
        window.menu().open(),
        Some(OpenMenu::Context { x: 5, y: 3, item: 0 })
    );
    assert_eq!(window.menu().items(), crate::core::CONTEXT_MENU);

    // Right-click outside the body does nothing.
    let mut other = self::window();
    other.handle_event(&mouse(MouseEventKind::Down(MouseButton::Right), 5, 0), &mut session);
    assert!(!other.menu().is_open());
}

#[test]
fn clicking_a_popup_item_runs_it() {
    let mut window = window();
    let mut session = session_with("text");

    window.handle_event(&mouse(MouseEventKind::Down(MouseButton::Right), 5, 3), &mut session);
    window.last_menu_popup = Some(Rect::new(5, 3, 16, 6));

    window.handle_event(&mouse(MouseEventKind::Moved, 8, 5), &mut session);
    assert_eq!(window.menu().selected(), Some(1));

    let ran = window.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 8, 6), &mut session);
    assert_eq!(ran, Some(Command::Paste));
    assert!(!window.menu().is_open());
}

#[test]
fn clicking_outside_an_open_menu_closes_it() {
    let mut window = window();
    let mut session = session_with("text");

    window.handle_event(&key(KeyCode::F(10)), &mut session);
    window.last_menu_popup = Some(Rect::new(0, 1, 20, 7));
    window.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 30, 5), &mut session);
    assert!(!window.menu().is_open());
    assert_eq!(session.body.cursor(), 0);
}

#[test]
fn wheel_scrolls_without_following_the_cursor() {
    let mut window = window();
    let text = (0..30).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let mut session = session_with(&text);

    window.handle_event(&mouse(MouseEventKind::ScrollDown, 5, 3), &mut session);
    assert_eq!(window.viewport().top, 3);
    assert!(!window.follow_cursor);

    window.reveal_cursor();
    assert!(window.follow_cursor);
}
