//! Alternating turn invariant: X, O, X, O, ... starting with X.

use super::super::{Cell, GameState, Mark};
use super::Invariant;

/// Invariant: every cell changed by step `i` now holds the mark that
/// [`Mark::for_history_index`] assigns to `i`.
///
/// Together with [`MonotonicHistoryInvariant`](super::MonotonicHistoryInvariant)
/// this pins the mark placed at step `i` to X for odd `i` and O for even `i`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let placed = Mark::for_history_index(i + 1).map(Cell::Occupied);
                pair[0]
                    .cells()
                    .iter()
                    .zip(pair[1].cells())
                    .filter(|(before, after)| before != after)
                    .all(|(_, after)| Some(*after) == placed)
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::replay(&[4, 0, 8, 2, 1, 7]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let first = Snapshot::EMPTY.with_mark(Position::Center, Mark::O);
        let game = GameState::from_parts(vec![Snapshot::EMPTY, first], 1);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let first = Snapshot::EMPTY.with_mark(Position::Center, Mark::X);
        let second = first.with_mark(Position::TopLeft, Mark::X);
        let game = GameState::from_parts(vec![Snapshot::EMPTY, first, second], 2);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_branched_game_holds() {
        let mut game = GameState::replay(&[0, 4, 8, 2]).unwrap();
        game.jump_to(1).unwrap();
        game.apply_move(2).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }
}
