//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal and jump back to any move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log file, overrides the config value
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply moves non-interactively and print the resulting game
    Replay {
        /// Cell indices (0-8) in play order, comma or space separated
        #[arg(value_delimiter = ',', num_args = 0..)]
        moves: Vec<usize>,

        /// History entry to display after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,
    },
}
