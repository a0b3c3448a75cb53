//! Terminal front end for tic-tac-toe with time travel.
//!
//! Owns a single [`GameState`](tictactoe_history::GameState) and turns key
//! presses into moves and jumps. Everything visual (cursor, colours,
//! winning-line highlight) lives here; the game crate only reports which
//! line won.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
mod ui;

pub use app::{App, AppAction, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Palette, Theme, TuiConfig, DEFAULT_CONFIG_PATH};
pub use input::{digit_to_position, move_cursor};
pub use replay::{ReplayError, render_transcript, run_replay};
pub use terminal::run_tui;
pub use ui::draw;
