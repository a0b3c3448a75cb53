//! Results of requests made against a [`GameState`](crate::GameState).
//!
//! Game-rule refusals are ordinary outcomes, not errors. Only requests that
//! no well-behaved caller can produce are reported as [`GameError`].

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A new snapshot was appended.
    Applied {
        /// Index of the new snapshot in history.
        move_number: usize,
        /// The mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// The request had no effect.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// True when the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Applied {
                move_number,
                mark,
                position,
            } => write!(f, "Move #{}: {} -> {}", move_number, mark, position),
            MoveOutcome::Ignored(reason) => write!(f, "Ignored: {}", reason),
        }
    }
}

/// Why a move request was ignored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum IgnoreReason {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The displayed board already has a winner.
    #[display("{} has already won", _0)]
    GameOver(Mark),
}

/// Caller-contract violation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is off the board (must be 0-8)", index)]
    CellOutOfBounds {
        /// The rejected index.
        index: usize,
    },

    /// History index that does not exist.
    #[display("Move #{} does not exist (history has {} entries)", index, len)]
    MoveOutOfRange {
        /// The rejected index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A history invariant failed after a move (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
