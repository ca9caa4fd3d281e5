//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Flow, Focus};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::GameEngine;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::AppConfig;

/// Runs the interactive game until the player quits.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = undo_on_err(enter_alternate_screen(), || {
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)
    })?;

    let engine = GameEngine::new().with_sort_descending(*config.sort_descending());
    let poll = Duration::from_millis(*config.poll_interval_ms());
    let res = run_app(&mut terminal, App::new(engine), poll);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Runs `undo` before handing back a failed `res`.
fn undo_on_err<T>(res: Result<T>, undo: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if res.is_err()
        && let Err(err) = undo()
    {
        error!(error = %err, "Failed to restore terminal");
    }
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    poll: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(poll)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_undo_runs_when_setup_fails() {
        let undone = Cell::new(false);
        let res: Result<()> = undo_on_err(Err(anyhow!("no tty")), || {
            undone.set(true);
            Ok(())
        });
        assert!(res.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_undo_skipped_on_success() {
        let undone = Cell::new(false);
        let res = undo_on_err(Ok(7), || {
            undone.set(true);
            Ok(())
        });
        assert_eq!(res.unwrap(), 7);
        assert!(!undone.get());
    }

    #[test]
    fn test_undo_failure_keeps_original_error() {
        let res: Result<()> =
            undo_on_err(Err(anyhow!("no tty")), || Err(io::Error::other("stuck")));
        assert_eq!(res.unwrap_err().to_string(), "no tty");
    }
}
