mod logging;

use quill::app::{App, ThemeCatalog};
use quill::kernel::services::adapters::{
    load_config, ClipboardService, LocalFileProvider, SystemFontSource,
};
use quill::kernel::Editor;
use quill::tui::{install_termination_signals, CrosstermEvents, TerminalGuard, TerminationSignal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::process::ExitCode;
use std::sync::mpsc;

fn main() -> ExitCode {
    let _logging = logging::init();

    match run() {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(signal)) => ExitCode::from(signal.exit_code() as u8),
        Err(err) => {
            tracing::error!(error = %err, "quill exited with an error");
            eprintln!("quill: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the editor until it quits. Returns the signal that ended it, if any.
fn run() -> io::Result<Option<TerminationSignal>> {
    let mut config = load_config();
    let catalog = ThemeCatalog::bundled();
    if !catalog.contains(&config.theme) {
        let first = catalog.names().into_iter().next().unwrap_or_default();
        tracing::warn!(theme = %config.theme, fallback = %first, "unknown theme");
        config.theme = first;
    }

    let editor = Editor::new(
        &config,
        Box::new(LocalFileProvider::new()),
        Box::new(ClipboardService::new()),
        Box::new(SystemFontSource::new()),
        catalog.names(),
    );
    let mut app = App::new(
        editor,
        catalog,
        Box::new(LocalFileProvider::new()),
        config.tab_text(),
    );

    let guard = TerminalGuard::new()?;
    guard.restorer().install_panic_hook();
    let (tx, rx) = mpsc::channel();
    install_termination_signals(guard.restorer(), tx)?;
    let mut events = CrosstermEvents::new(rx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = app.run(&mut terminal, &mut events);
    drop(terminal);
    drop(guard);

    result?;
    Ok(events.received_signal())
}
