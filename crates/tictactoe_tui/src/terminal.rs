//! Terminal setup and the synchronous event loop.

use super::app::{App, AppAction};
use super::config::{Palette, TuiConfig};
use super::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// Once raw mode is on, the terminal is restored on every exit path,
/// including a failed screen setup.
#[instrument(skip(config), fields(log_file = %config.log_file().display()))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    let palette = config.theme().palette()?;

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = setup_or_restore(enter_screen, restore_screen)?;

    let res = run_app(&mut terminal, App::new(), &palette);

    restore_screen()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_screen() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `setup`; if it fails, runs `restore` before returning the setup error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().or_else(|err| {
        if let Err(restore_err) = restore() {
            error!(error = ?restore_err, "Failed to restore terminal after setup error");
        }
        Err(err)
    })
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    palette: &Palette,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, palette))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!(code = ?key.code, "Key pressed");
            if app.handle_key(key.code) == AppAction::Quit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores() {
        let restored = Cell::new(false);
        let res: Result<()> = setup_or_restore(
            || Err(anyhow!("no alternate screen")),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "no alternate screen");
    }

    #[test]
    fn test_failed_restore_keeps_setup_error() {
        let res: Result<()> = setup_or_restore(
            || Err(anyhow!("no alternate screen")),
            || Err(anyhow!("still raw")),
        );
        assert_eq!(res.unwrap_err().to_string(), "no alternate screen");
    }

    #[test]
    fn test_successful_setup_skips_restore() {
        let restored = Cell::new(false);
        let res = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert_eq!(res.unwrap(), 7);
        assert!(!restored.get());
    }
}
