//! Command handlers of the editing session.
//!
//! `Editor` owns the `Session` and the external collaborators. The UI turns
//! input into a `Command` and calls `execute`; modal interaction goes through
//! the `Dialogs` port so every handler runs the same under a terminal or a
//! scripted test double.

use super::count::TextCounts;
use super::error::{EditorError, FileOp, SelectionAction};
use super::session::Session;
use super::style::{selectable_families, selectable_sizes};
use crate::core::Command;
use crate::kernel::services::ports::clipboard::ClipboardProvider;
use crate::kernel::services::ports::config::EditorConfig;
use crate::kernel::services::ports::dialogs::{Dialogs, FontDialogSeed, NoticeKind, SaveChoice};
use crate::kernel::services::ports::file::FileProvider;
use crate::kernel::services::ports::fonts::FontSource;

pub const COUNT_TITLE: &str = "Text Counts.";
pub const HELP_TITLE: &str = "Help";

const HELP_INTRO: &str = "Do you have questions or concerns?\n\
Open an issue on the project's repository page.";

/// What the event loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    /// Tear down and rebuild the window under `Session::theme`.
    RebuildWindow,
}

pub struct Editor {
    session: Session,
    files: Box<dyn FileProvider>,
    clipboard: Box<dyn ClipboardProvider>,
    fonts: Box<dyn FontSource>,
    themes: Vec<String>,
}

impl Editor {
    pub fn new(
        config: &EditorConfig,
        files: Box<dyn FileProvider>,
        clipboard: Box<dyn ClipboardProvider>,
        fonts: Box<dyn FontSource>,
        themes: Vec<String>,
    ) -> Self {
        Self {
            session: Session::new(config),
            files,
            clipboard,
            fonts,
            themes,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// Runs `command`. Errors are logged and shown through `dialogs`, so the
    /// caller always gets back to idle.
    pub fn execute(&mut self, command: Command, dialogs: &mut dyn Dialogs) -> Outcome {
        tracing::debug!(command = command.name(), "execute");
        match self.dispatch(command, dialogs) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(command = command.name(), error = %err, "command failed");
                dialogs.notify(NoticeKind::Error, err.title(), &err.to_string());
                Outcome::Continue
            }
        }
    }

    fn dispatch(
        &mut self,
        command: Command,
        dialogs: &mut dyn Dialogs,
    ) -> Result<Outcome, EditorError> {
        match command {
            Command::New => self.new_document(dialogs),
            Command::Open => self.open(dialogs),
            Command::Save => self.save(dialogs).map(|_| Outcome::Continue),
            Command::SaveAs => self.save_as(dialogs).map(|_| Outcome::Continue),
            Command::Exit => Ok(Outcome::Quit),
            Command::Delete => self.delete(),
            Command::Copy => self.copy(),
            Command::Paste => self.paste(),
            Command::SelectAll => {
                self.session.body.select_all();
                Ok(Outcome::Continue)
            }
            Command::Font => self.edit_font(dialogs),
            Command::WordWrap => {
                self.toggle_word_wrap();
                Ok(Outcome::Continue)
            }
            Command::Theme => Ok(self.change_theme(dialogs)),
            Command::Count => {
                self.count(dialogs);
                Ok(Outcome::Continue)
            }
            Command::AskForHelp => {
                dialogs.notify(NoticeKind::Info, HELP_TITLE, &help_text());
                Ok(Outcome::Continue)
            }
        }
    }

    // ==================== File ====================

    fn new_document(&mut self, dialogs: &mut dyn Dialogs) -> Result<Outcome, EditorError> {
        if self.matches_disk() {
            self.session.reset();
            return Ok(Outcome::Continue);
        }

        match dialogs.ask_save_changes(&self.session.file_name()) {
            SaveChoice::Save => {
                if self.save(dialogs)? {
                    self.session.reset();
                }
            }
            SaveChoice::Discard => {
                tracing::info!(file = %self.session.file_name(), "discarding changes");
                self.session.reset();
            }
            SaveChoice::Cancel => {}
        }
        Ok(Outcome::Continue)
    }

    /// Whether the body equals the open file's content on disk. Without a
    /// file only an empty body counts as unchanged.
    fn matches_disk(&self) -> bool {
        let Some(path) = self.session.open_file.as_deref() else {
            return self.session.body.is_empty();
        };
        match self.files.read_file(path) {
            Ok(disk) => self.session.body.content_eq(&disk),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "open file unreadable, treating body as modified");
                false
            }
        }
    }

    fn open(&mut self, dialogs: &mut dyn Dialogs) -> Result<Outcome, EditorError> {
        let Some(path) = dialogs.ask_open_path(self.session.open_dir()) else {
            return Ok(Outcome::Continue);
        };

        let text = self
            .files
            .read_file(&path)
            .map_err(|source| EditorError::FileAccess {
                path: path.clone(),
                op: FileOp::Read,
                source,
            })?;

        tracing::info!(path = %path.display(), chars = text.chars().count(), "opened file");
        self.session.load(path, &text);
        Ok(Outcome::Continue)
    }

    /// Returns whether the body was written.
    fn save(&mut self, dialogs: &mut dyn Dialogs) -> Result<bool, EditorError> {
        let Some(path) = self.session.open_file.clone() else {
            return self.save_as(dialogs);
        };
        self.write_to(path)?;
        Ok(true)
    }

    fn save_as(&mut self, dialogs: &mut dyn Dialogs) -> Result<bool, EditorError> {
        let Some(path) = dialogs.ask_save_path(self.session.open_file.as_deref()) else {
            return Ok(false);
        };
        self.write_to(path)?;
        Ok(true)
    }

    fn write_to(&mut self, path: std::path::PathBuf) -> Result<(), EditorError> {
        let text = self.session.body.text();
        self.files
            .write_file(&path, &text)
            .map_err(|source| EditorError::FileAccess {
                path: path.clone(),
                op: FileOp::Write,
                source,
            })?;

        tracing::info!(path = %path.display(), chars = text.chars().count(), "saved file");
        self.session.mark_saved(path);
        Ok(())
    }

    // ==================== Edit ====================

    fn copy(&mut self) -> Result<Outcome, EditorError> {
        let Some(text) = self.session.body.selected_text() else {
            return Err(EditorError::NoSelection {
                action: SelectionAction::Copy,
            });
        };
        self.clipboard.set_text(&text)?;
        Ok(Outcome::Continue)
    }

    fn paste(&mut self) -> Result<Outcome, EditorError> {
        let text = self.clipboard.get_text()?;
        self.session.body.replace_selection(&text);
        Ok(Outcome::Continue)
    }

    fn delete(&mut self) -> Result<Outcome, EditorError> {
        if !self.session.body.has_selection() {
            return Err(EditorError::NoSelection {
                action: SelectionAction::Delete,
            });
        }
        self.session.body.delete_selection();
        Ok(Outcome::Continue)
    }

    // ==================== Format ====================

    fn toggle_word_wrap(&mut self) {
        self.session.word_wrap = !self.session.word_wrap;
        tracing::debug!(word_wrap = self.session.word_wrap, "word wrap toggled");
    }

    fn edit_font(&mut self, dialogs: &mut dyn Dialogs) -> Result<Outcome, EditorError> {
        let installed = match self.fonts.families() {
            Ok(families) => families,
            Err(err) => {
                tracing::warn!(error = %err, "font enumeration failed");
                Vec::new()
            }
        };

        let style = &self.session.style;
        let seed = FontDialogSeed {
            families: selectable_families(installed, &style.family),
            sizes: selectable_sizes(style.size),
            style: style.clone(),
        };

        if let Some(style) = dialogs.edit_font(seed) {
            tracing::info!(style = %style.descriptor(), "font changed");
            self.session.style = style;
        }
        Ok(Outcome::Continue)
    }

    // ==================== View ====================

    fn change_theme(&mut self, dialogs: &mut dyn Dialogs) -> Outcome {
        let Some(theme) = dialogs.choose_theme(&self.themes, &self.session.theme) else {
            return Outcome::Continue;
        };
        tracing::info!(theme = %theme, "theme changed");
        self.session.theme = theme;
        Outcome::RebuildWindow
    }

    fn count(&self, dialogs: &mut dyn Dialogs) {
        let counts = TextCounts::of(&self.session.body.text());
        dialogs.notify(NoticeKind::Info, COUNT_TITLE, &counts.to_string());
    }
}

/// Help text: contact pointer followed by the key bindings.
pub fn help_text() -> String {
    let mut text = String::from(HELP_INTRO);
    text.push_str("\n\nKeys:");
    for command in Command::ALL {
        if let Some(hint) = command.shortcut_hint() {
            text.push_str(&format!("\n  {:<14}{}", hint, command.label()));
        }
    }
    text.push_str("\n  F10           Menu bar");
    text
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor.rs"]
mod tests;
