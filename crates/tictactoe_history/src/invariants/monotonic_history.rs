//! Monotonic history invariant: each step fills exactly one empty cell.

use super::super::{Cell, GameState};
use super::Invariant;

/// Invariant: every snapshot adds one mark to its predecessor.
///
/// Marks are never removed or changed, and no step places two marks.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);

            let kept = before
                .cells()
                .iter()
                .zip(after.cells())
                .all(|(b, a)| *b == Cell::Empty || b == a);

            kept && after.filled_count() == before.filled_count() + 1
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty cell"
    }
}
