//! Terminal frontend: main window, menus, dialogs and the event loop.
//!
//! The loop is strictly sequential. Each turn draws the window, waits for one
//! input event and applies it; a command selected by that event runs to
//! completion (including any dialogs it opens) before the next event is read.

mod dialogs;
mod input;
mod keymap;
mod layout;
mod menu;
mod render;
mod theme;
mod util;
mod window;

pub use dialogs::{complete_path, Completion, TuiDialogs};
pub use keymap::Keymap;
pub use layout::{wrap_line, BodyLayout, Viewport};
pub use menu::{MenuState, OpenMenu};
pub use render::{body_title, status_text, style_modifiers};
pub use theme::{parse_color, ThemeCatalog, UiTheme};
pub use window::Window;

use crate::core::event::InputEvent;
use crate::kernel::services::ports::file::FileProvider;
use crate::kernel::{Editor, Outcome};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;

/// Blocking source of input events. `Ok(None)` ends the session.
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Option<InputEvent>>;
}

pub struct App {
    editor: Editor,
    catalog: ThemeCatalog,
    window: Window,
    /// Backs path completion in the open/save prompts.
    files: Box<dyn FileProvider>,
    tab_text: String,
}

impl App {
    pub fn new(
        editor: Editor,
        catalog: ThemeCatalog,
        files: Box<dyn FileProvider>,
        tab_text: String,
    ) -> Self {
        let window = Window::new(window_theme(&catalog, &editor.session().theme), tab_text.clone());
        Self {
            editor,
            catalog,
            window,
            files,
            tab_text,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut dyn EventSource,
    ) -> io::Result<()> {
        tracing::info!("event loop started");
        loop {
            let backdrop = {
                let window = &mut self.window;
                let session = self.editor.session();
                terminal.draw(|frame| window.render(frame, session))?.buffer.clone()
            };

            let Some(event) = events.next_event()? else {
                break;
            };

            let Some(command) = self.window.handle_event(&event, self.editor.session_mut()) else {
                continue;
            };

            let mut dialogs = TuiDialogs::new(
                terminal,
                events,
                self.window.theme(),
                &backdrop,
                self.files.as_ref(),
            );
            let outcome = self.editor.execute(command, &mut dialogs);
            if dialogs.finish()? {
                break;
            }

            match outcome {
                Outcome::Continue => {}
                Outcome::Quit => break,
                Outcome::RebuildWindow => {
                    let theme = window_theme(&self.catalog, &self.editor.session().theme);
                    self.window = Window::new(theme, self.tab_text.clone());
                }
            }
            self.window.reveal_cursor();
        }
        tracing::info!("event loop finished");
        Ok(())
    }
}

fn window_theme(catalog: &ThemeCatalog, name: &str) -> UiTheme {
    let mut theme = catalog.get(name);
    theme.adapt_to_terminal_capabilities();
    theme
}
