//! Tic-tac-toe game state with move history and time travel.
//!
//! The crate models a game as an append-only list of immutable board
//! snapshots plus a cursor into that list. Front ends render whatever
//! snapshot the cursor points at and feed user input back through two
//! operations:
//!
//! - [`GameState::apply_move`] places the next mark and discards any
//!   snapshots after the cursor.
//! - [`GameState::jump_to`] moves the cursor to an earlier (or later)
//!   snapshot without touching history.
//!
//! Win detection lives in [`rules`] and is a pure function over a single
//! [`Snapshot`].
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, Mark, WinnerResult};
//!
//! # fn main() -> Result<(), tictactoe_history::GameError> {
//! let game = GameState::replay(&[0, 3, 1, 4, 2])?;
//! match game.winner() {
//!     WinnerResult::Winner { mark, line } => {
//!         assert_eq!(mark, Mark::X);
//!         assert_eq!(line.indices(), [0, 1, 2]);
//!     }
//!     WinnerResult::NoWinner => unreachable!(),
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{GameError, IgnoreReason, MoveOutcome};
pub use game::{GameState, MoveEntry};
pub use position::Position;
pub use rules::{Status, WinLine, WinnerResult, evaluate, is_full, status};
pub use types::{Cell, Mark, Snapshot, SnapshotParseError};
