//! Non-interactive replay of a move list.

use derive_more::{Display, Error, From};
use std::fmt::Write;
use tictactoe_history::{GameError, GameState};
use tracing::{info, instrument};

/// Failure while replaying moves from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// A move or jump broke the game's calling contract.
    #[display("Replay failed: {}", _0)]
    Game(GameError),
}

/// Applies `moves`, optionally jumps, and returns a printable transcript.
#[instrument]
pub fn run_replay(moves: &[usize], jump: Option<usize>) -> Result<String, ReplayError> {
    let mut game = GameState::new();
    let log = game.apply_moves(moves)?;

    if let Some(index) = jump {
        game.jump_to(index)?;
    }

    info!(
        applied = log.iter().filter(|o| o.is_applied()).count(),
        current_move = game.current_move(),
        "Replay finished"
    );

    let mut out = String::new();
    for outcome in &log {
        let _ = writeln!(out, "{}", outcome);
    }
    if !log.is_empty() {
        out.push('\n');
    }
    out.push_str(&render_transcript(&game));
    Ok(out)
}

/// Board, status line, and move list for the displayed snapshot.
pub fn render_transcript(game: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", game.current_snapshot().display());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", game.status());
    if let Some(line) = game.winner().line() {
        let [a, b, c] = line.indices();
        let _ = writeln!(out, "Winning line: {}, {}, {}", a, b, c);
    }
    let _ = writeln!(out);
    for entry in game.move_list() {
        let marker = if entry.index == game.current_move() { '>' } else { ' ' };
        let _ = writeln!(out, "{} {}", marker, entry.label);
    }
    out
}
