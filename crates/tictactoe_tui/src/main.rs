//! Tic-tac-toe - terminal front end
//!
//! Interactive play with time travel, or scripted replay to stdout.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_tui::{Cli, Command, TuiConfig, run_replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => play(config, log_file),
        Command::Replay { moves, jump } => replay(&moves, jump),
    }
}

/// Run the interactive TUI
fn play(config_path: Option<PathBuf>, log_file: Option<PathBuf>) -> Result<()> {
    let mut config = TuiConfig::load(config_path.as_deref())?;
    if let Some(log_file) = log_file {
        config = config.with_log_file(log_file);
    }

    // Log to a file so output does not interfere with the TUI
    let file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Logging initialised");
    run_tui(&config)
}

/// Replay moves and print the result
fn replay(moves: &[usize], jump: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let transcript = run_replay(moves, jump)?;
    print!("{}", transcript);
    Ok(())
}
