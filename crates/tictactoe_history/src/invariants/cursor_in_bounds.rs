//! Cursor invariant: the displayed move exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move points into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Snapshot;

    #[test]
    fn test_holds_after_jump() {
        let mut game = GameState::replay(&[4, 0, 8]).unwrap();
        game.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let game = GameState::from_parts(vec![Snapshot::EMPTY], 1);
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
