//! Game status line derived from a board and its verdict.

use super::super::{Mark, Snapshot};
use super::draw::is_full;
use super::win::WinnerResult;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line should say about a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Status {
    /// A line has been completed.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board is full with no winner.
    #[display("Draw")]
    Draw,
    /// Game is still going.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// True once the game can accept no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Derives the status for `board`.
///
/// A win outranks a full board, which outranks the next-player prompt.
#[instrument(skip(board))]
pub fn status(board: &Snapshot, result: &WinnerResult, x_is_next: bool) -> Status {
    if let WinnerResult::Winner { mark, .. } = result {
        Status::Winner(*mark)
    } else if is_full(board) {
        Status::Draw
    } else if x_is_next {
        Status::NextPlayer(Mark::X)
    } else {
        Status::NextPlayer(Mark::O)
    }
}

#[cfg(test)]
mod tests {
    use super::super::win::evaluate;
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::Winner(Mark::O).to_string(), "Winner: O");
        assert_eq!(Status::Draw.to_string(), "Draw");
        assert_eq!(Status::NextPlayer(Mark::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_winner_outranks_full_board() {
        let board: Snapshot = "XOX/XOO/XXO".parse().unwrap();
        let result = evaluate(&board);
        assert_eq!(status(&board, &result, false), Status::Winner(Mark::X));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let board: Snapshot = "XOX/XOO/OXX".parse().unwrap();
        let result = evaluate(&board);
        let status = status(&board, &result, true);
        assert_eq!(status, Status::Draw);
        assert!(status.is_over());
    }

    #[test]
    fn test_in_progress_uses_turn() {
        let board: Snapshot = "X../.../...".parse().unwrap();
        let result = evaluate(&board);
        assert_eq!(status(&board, &result, false), Status::NextPlayer(Mark::O));
        assert!(!status(&board, &result, false).is_over());
    }
}
