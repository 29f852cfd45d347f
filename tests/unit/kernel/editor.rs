use super::*;
use crate::kernel::services::ports::clipboard::ClipboardError;
use crate::kernel::services::ports::file::{DirEntry, FileError, Result as FileResult};
use crate::kernel::services::ports::fonts::FontSourceError;
use crate::kernel::style::FontStyle;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Default)]
struct ScriptedDialogs {
    save_choices: VecDeque<SaveChoice>,
    open_paths: VecDeque<Option<PathBuf>>,
    save_paths: VecDeque<Option<PathBuf>>,
    fonts: VecDeque<Option<FontStyle>>,
    themes: VecDeque<Option<String>>,
    save_prompts: Vec<String>,
    open_seeds: Vec<Option<PathBuf>>,
    font_seeds: Vec<FontDialogSeed>,
    notices: Vec<(NoticeKind, String, String)>,
}

impl Dialogs for ScriptedDialogs {
    fn ask_save_changes(&mut self, file_name: &str) -> SaveChoice {
        self.save_prompts.push(file_name.to_string());
        self.save_choices.pop_front().unwrap_or(SaveChoice::Cancel)
    }

    fn ask_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.open_seeds.push(start_dir.map(Path::to_path_buf));
        self.open_paths.pop_front().flatten()
    }

    fn ask_save_path(&mut self, _suggested: Option<&Path>) -> Option<PathBuf> {
        self.save_paths.pop_front().flatten()
    }

    fn edit_font(&mut self, seed: FontDialogSeed) -> Option<FontStyle> {
        self.font_seeds.push(seed);
        self.fonts.pop_front().flatten()
    }

    fn choose_theme(&mut self, _themes: &[String], _current: &str) -> Option<String> {
        self.themes.pop_front().flatten()
    }

    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.notices
            .push((kind, title.to_string(), message.to_string()));
    }
}

#[derive(Default)]
struct MemFilesState {
    files: HashMap<PathBuf, String>,
    writes: usize,
    fail_writes: bool,
}

#[derive(Clone, Default)]
struct MemFiles(Rc<RefCell<MemFilesState>>);

impl MemFiles {
    fn with_file(path: &str, text: &str) -> Self {
        let files = Self::default();
        files
            .0
            .borrow_mut()
            .files
            .insert(PathBuf::from(path), text.to_string());
        files
    }

    fn get(&self, path: &str) -> Option<String> {
        self.0.borrow().files.get(Path::new(path)).cloned()
    }

    fn writes(&self) -> usize {
        self.0.borrow().writes
    }
}

impl FileProvider for MemFiles {
    fn read_file(&self, path: &Path) -> FileResult<String> {
        self.0
            .borrow()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FileError::NotFound(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, content: &str) -> FileResult<()> {
        let mut state = self.0.borrow_mut();
        if state.fail_writes {
            return Err(FileError::PermissionDenied(path.to_path_buf()));
        }
        state.writes += 1;
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_dir(&self, _path: &Path) -> FileResult<Vec<DirEntry>> {
        Ok(Vec::new())
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }
}

#[derive(Default)]
struct ClipState {
    text: Option<String>,
    sets: usize,
    broken: bool,
}

#[derive(Clone, Default)]
struct SharedClipboard(Rc<RefCell<ClipState>>);

impl ClipboardProvider for SharedClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let state = self.0.borrow();
        if state.broken {
            return Err(ClipboardError::NotAvailable);
        }
        Ok(state.text.clone().unwrap_or_default())
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self.0.borrow_mut();
        state.sets += 1;
        state.text = Some(text.to_string());
        Ok(())
    }
}

struct StaticFonts(Result<Vec<String>, FontSourceError>);

impl FontSource for StaticFonts {
    fn families(&self) -> Result<Vec<String>, FontSourceError> {
        self.0.clone()
    }
}

struct Fixture {
    editor: Editor,
    files: MemFiles,
    clipboard: SharedClipboard,
    dialogs: ScriptedDialogs,
}

fn fixture_with(files: MemFiles, fonts: Result<Vec<String>, FontSourceError>) -> Fixture {
    let clipboard = SharedClipboard::default();
    let editor = Editor::new(
        &EditorConfig::default(),
        Box::new(files.clone()),
        Box::new(clipboard.clone()),
        Box::new(StaticFonts(fonts)),
        vec!["Default".to_string(), "Nord".to_string()],
    );
    Fixture {
        editor,
        files,
        clipboard,
        dialogs: ScriptedDialogs::default(),
    }
}

fn fixture() -> Fixture {
    fixture_with(MemFiles::default(), Ok(Vec::new()))
}

impl Fixture {
    fn run(&mut self, command: Command) -> Outcome {
        self.editor.execute(command, &mut self.dialogs)
    }

    fn open(&mut self, path: &str) {
        self.dialogs.open_paths.push_back(Some(PathBuf::from(path)));
        assert_eq!(self.run(Command::Open), Outcome::Continue);
    }

    fn body(&self) -> String {
        self.editor.session().body.text()
    }

    fn type_text(&mut self, text: &str) {
        self.editor.session_mut().body.insert(text);
    }
}

// ==================== new ====================

#[test]
fn test_new_on_empty_untitled_clears_without_prompt() {
    let mut fx = fixture();
    fx.run(Command::New);
    assert!(fx.dialogs.save_prompts.is_empty());
    assert!(fx.body().is_empty());
}

#[test]
fn test_new_on_untitled_text_prompts_and_cancel_keeps_everything() {
    let mut fx = fixture();
    fx.type_text("draft");
    fx.dialogs.save_choices.push_back(SaveChoice::Cancel);

    fx.run(Command::New);

    assert_eq!(fx.dialogs.save_prompts, ["Untitled"]);
    assert_eq!(fx.body(), "draft");
}

#[test]
fn test_new_with_unmodified_open_file_clears_without_writing() {
    let mut fx = fixture_with(MemFiles::with_file("/d/a.txt", "abc"), Ok(Vec::new()));
    fx.open("/d/a.txt");

    fx.run(Command::New);

    assert!(fx.dialogs.save_prompts.is_empty());
    assert_eq!(fx.files.writes(), 0);
    assert!(fx.body().is_empty());
    assert!(fx.editor.session().open_file.is_none());
}

#[test]
fn test_new_save_writes_then_clears() {
    let mut fx = fixture_with(MemFiles::with_file("/d/a.txt", "abc"), Ok(Vec::new()));
    fx.open("/d/a.txt");
    fx.type_text("X");
    fx.dialogs.save_choices.push_back(SaveChoice::Save);

    fx.run(Command::New);

    assert_eq!(fx.dialogs.save_prompts, ["a.txt"]);
    assert_eq!(fx.files.get("/d/a.txt").as_deref(), Some("Xabc"));
    assert!(fx.body().is_empty());
    assert!(fx.editor.session().open_file.is_none());
}

#[test]
fn test_new_save_on_untitled_with_cancelled_path_keeps_body() {
    let mut fx = fixture();
    fx.type_text("draft");
    fx.dialogs.save_choices.push_back(SaveChoice::Save);
    fx.dialogs.save_paths.push_back(None);

    fx.run(Command::New);

    assert_eq!(fx.body(), "draft");
    assert_eq!(fx.files.writes(), 0);
    assert!(fx.dialogs.notices.is_empty());
}

#[test]
fn test_new_save_failure_notifies_and_keeps_body() {
    let mut fx = fixture_with(MemFiles::with_file("/d/a.txt", "abc"), Ok(Vec::new()));
    fx.open("/d/a.txt");
    fx.type_text("X");
    fx.files.0.borrow_mut().fail_writes = true;
    fx.dialogs.save_choices.push_back(SaveChoice::Save);

    fx.run(Command::New);

    assert_eq!(fx.body(), "Xabc");
    assert_eq!(fx.dialogs.notices.len(), 1);
    assert_eq!(fx.dialogs.notices[0].0, NoticeKind::Error);
    assert_eq!(fx.dialogs.notices[0].1, "Save failed");
}

#[test]
fn test_new_treats_vanished_file_as_modified() {
    let mut fx = fixture_with(MemFiles::with_file("/d/a.txt", "abc"), Ok(Vec::new()));
    fx.open("/d/a.txt");
    fx.files.0.borrow_mut().files.clear();
    fx.dialogs.save_choices.push_back(SaveChoice::Discard);

    fx.run(Command::New);

    assert_eq!(fx.dialogs.save_prompts.len(), 1);
    assert!(fx.body().is_empty());
    assert_eq!(fx.files.writes(), 0);
}

// ==================== open / save ====================

#[test]
fn test_open_failure_leaves_session_unchanged() {
    let mut fx = fixture();
    fx.type_text("keep");
    fx.open("/missing.txt");

    assert_eq!(fx.body(), "keep");
    assert!(fx.editor.session().open_file.is_none());
    let (kind, title, message) = &fx.dialogs.notices[0];
    assert_eq!(*kind, NoticeKind::Error);
    assert_eq!(title, "Open failed");
    assert!(message.contains("missing.txt"));
}

#[test]
fn test_open_is_seeded_with_current_directory() {
    let mut fx = fixture_with(MemFiles::with_file("/d/a.txt", "abc"), Ok(Vec::new()));
    fx.open("/d/a.txt");
    fx.dialogs.open_paths.push_back(None);
    fx.run(Command::Open);

    assert_eq!(
        fx.dialogs.open_seeds,
        [None, Some(PathBuf::from("/d"))]
    );
    assert_eq!(fx.body(), "abc");
}

#[test]
fn test_save_without_file_goes_through_save_as() {
    let mut fx = fixture();
    fx.type_text("hello");
    fx.dialogs.save_paths.push_back(Some(PathBuf::from("/d/new.txt")));

    fx.run(Command::Save);

    assert_eq!(fx.files.get("/d/new.txt").as_deref(), Some("hello"));
    assert_eq!(
        fx.editor.session().open_file.as_deref(),
        Some(Path::new("/d/new.txt"))
    );
    assert!(!fx.editor.session().is_modified());
}

#[test]
fn test_save_as_failure_keeps_previous_file() {
    let mut fx = fixture_with(MemFiles::with_file("/d/a.txt", "abc"), Ok(Vec::new()));
    fx.open("/d/a.txt");
    fx.files.0.borrow_mut().fail_writes = true;
    fx.dialogs.save_paths.push_back(Some(PathBuf::from("/ro/b.txt")));

    fx.run(Command::SaveAs);

    assert_eq!(
        fx.editor.session().open_file.as_deref(),
        Some(Path::new("/d/a.txt"))
    );
    assert_eq!(fx.dialogs.notices[0].1, "Save failed");
}

// ==================== edit ====================

#[test]
fn test_copy_without_selection_is_an_error() {
    let mut fx = fixture();
    fx.type_text("Hello");

    assert_eq!(fx.run(Command::Copy), Outcome::Continue);

    assert_eq!(fx.clipboard.0.borrow().sets, 0);
    assert_eq!(
        fx.dialogs.notices,
        [(
            NoticeKind::Error,
            "ERROR".to_string(),
            "Select portion of text to be copied.".to_string()
        )]
    );
}

#[test]
fn test_copy_then_paste_over_everything() {
    let mut fx = fixture();
    fx.type_text("Hello world");
    fx.editor.session_mut().body.select(0..5);

    fx.run(Command::Copy);
    assert_eq!(fx.clipboard.0.borrow().text.as_deref(), Some("Hello"));

    fx.run(Command::SelectAll);
    fx.run(Command::Paste);
    assert_eq!(fx.body(), "Hello");
}

#[test]
fn test_paste_without_selection_inserts_at_cursor() {
    let mut fx = fixture();
    fx.type_text("ac");
    fx.editor.session_mut().body.set_cursor(1, false);
    fx.clipboard.0.borrow_mut().text = Some("b".to_string());

    fx.run(Command::Paste);

    assert_eq!(fx.body(), "abc");
    assert_eq!(fx.editor.session().body.cursor(), 2);
}

#[test]
fn test_paste_failure_leaves_body_untouched() {
    let mut fx = fixture();
    fx.type_text("abc");
    fx.run(Command::SelectAll);
    fx.clipboard.0.borrow_mut().broken = true;

    fx.run(Command::Paste);

    assert_eq!(fx.body(), "abc");
    assert!(fx.editor.session().body.has_selection());
    assert_eq!(fx.dialogs.notices[0].1, "Clipboard");
}

#[test]
fn test_delete_requires_selection() {
    let mut fx = fixture();
    fx.type_text("abc");

    fx.run(Command::Delete);
    assert_eq!(fx.body(), "abc");
    assert_eq!(
        fx.dialogs.notices[0].2,
        "Select portion of text to be deleted."
    );

    fx.editor.session_mut().body.select(1..2);
    fx.run(Command::Delete);
    assert_eq!(fx.body(), "ac");
    assert_eq!(fx.dialogs.notices.len(), 1);
}

// ==================== format / view ====================

#[test]
fn test_word_wrap_toggles() {
    let mut fx = fixture();
    let before = fx.editor.session().word_wrap;
    fx.run(Command::WordWrap);
    assert_eq!(fx.editor.session().word_wrap, !before);
    fx.run(Command::WordWrap);
    assert_eq!(fx.editor.session().word_wrap, before);
}

#[test]
fn test_edit_font_seed_and_confirm() {
    let fonts = Ok(vec![
        "Verdana".to_string(),
        "@MS Gothic".to_string(),
        "Arial".to_string(),
        "Arial".to_string(),
    ]);
    let mut fx = fixture_with(MemFiles::default(), fonts);
    let chosen = FontStyle {
        family: "Arial".to_string(),
        size: 14,
        bold: true,
        italic: false,
        underline: true,
        strikethrough: false,
    };
    fx.dialogs.fonts.push_back(Some(chosen.clone()));

    fx.run(Command::Font);

    let seed = &fx.dialogs.font_seeds[0];
    assert_eq!(seed.families, ["Arial", "System", "Verdana"]);
    assert_eq!(seed.sizes, crate::kernel::style::FONT_SIZES);
    assert_eq!(seed.style, FontStyle::default());
    assert_eq!(fx.editor.session().style, chosen);
}

#[test]
fn test_edit_font_cancel_and_enumeration_failure() {
    let mut fx = fixture_with(
        MemFiles::default(),
        Err(FontSourceError("no fonts".to_string())),
    );
    fx.dialogs.fonts.push_back(None);

    fx.run(Command::Font);

    assert_eq!(fx.dialogs.font_seeds[0].families, ["System"]);
    assert_eq!(fx.editor.session().style, FontStyle::default());
    assert!(fx.dialogs.notices.is_empty());
}

#[test]
fn test_change_theme_requests_rebuild_and_keeps_body() {
    let mut fx = fixture();
    fx.type_text("text");
    fx.editor.session_mut().body.select(1..3);
    fx.dialogs.themes.push_back(Some("Nord".to_string()));

    assert_eq!(fx.run(Command::Theme), Outcome::RebuildWindow);
    assert_eq!(fx.editor.session().theme, "Nord");
    assert_eq!(fx.body(), "text");
    assert_eq!(fx.editor.session().body.selection(), Some(1..3));

    assert_eq!(fx.run(Command::Theme), Outcome::Continue);
    assert_eq!(fx.editor.session().theme, "Nord");
}

#[test]
fn test_count_notifies_totals() {
    let mut fx = fixture();
    fx.type_text("ab  cd\n");
    fx.run(Command::Count);
    assert_eq!(
        fx.dialogs.notices,
        [(
            NoticeKind::Info,
            COUNT_TITLE.to_string(),
            "Words: 2 Characters: 4".to_string()
        )]
    );
}

#[test]
fn test_help_lists_shortcuts() {
    let mut fx = fixture();
    fx.run(Command::AskForHelp);
    let (kind, title, message) = &fx.dialogs.notices[0];
    assert_eq!(*kind, NoticeKind::Info);
    assert_eq!(title, HELP_TITLE);
    assert!(message.contains("Ctrl+N"));
    assert!(message.contains("Word Wrap"));
}

#[test]
fn test_exit_quits() {
    let mut fx = fixture();
    assert_eq!(fx.run(Command::Exit), Outcome::Quit);
}
