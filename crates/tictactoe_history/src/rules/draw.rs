//! Draw detection logic for tic-tac-toe.

use super::super::{Cell, Snapshot};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Snapshot) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
