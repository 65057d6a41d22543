//! Terminal front end.

mod app;
mod input;
mod ui;

pub use app::{App, Flow, Focus};

use crate::config::AppConfig;
use crate::logging;
use crate::session::{MoveOrder, Session};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the player quits.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    logging::init_file(config.log().file())?;

    info!("Starting terminal UI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let session = Session::new(MoveOrder::from_ascending(*config.ui().ascending()));
    let mut app = App::new(session);
    let result = event_loop(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    match &result {
        Ok(()) => info!(
            moves = app.session().game().history().len() - 1,
            status = %app.session().game().status(),
            "Terminal UI closed"
        ),
        Err(e) => error!(error = %e, "Terminal UI failed"),
    }
    result
}

/// Puts the terminal back into normal mode when dropped.
///
/// Created as soon as raw mode is on, so every later failure restores the
/// terminal on the way out.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}
