//! Start invariant: the first snapshot is the empty board.

use super::super::{GameState, Snapshot};
use super::Invariant;

/// Invariant: `history[0]` is the all-empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameState> for StartsEmptyInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&Snapshot::EMPTY)
    }

    fn description() -> &'static str {
        "History starts at the empty board"
    }
}
