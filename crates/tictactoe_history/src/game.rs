//! Game state: snapshot history plus the cursor used for time travel.

use super::action::{GameError, IgnoreReason, MoveOutcome};
#[cfg(debug_assertions)]
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{self, Status, WinnerResult};
use super::{Mark, Position, Snapshot};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// One row of the move list a front end offers for time travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index to pass to [`GameState::jump_to`].
    pub index: usize,
    /// Button text.
    pub label: String,
}

impl MoveEntry {
    fn new(index: usize) -> Self {
        let label = if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        };
        Self { index, label }
    }
}

/// A single game of tic-tac-toe with linear, rewritable history.
///
/// `history[0]` is always the empty board and every later entry adds one
/// mark. `current_move` selects the snapshot on display; whose turn it is
/// follows from its parity, X on even indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<Snapshot>,
    current_move: usize,
}

impl GameState {
    /// Creates a game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::EMPTY],
            current_move: 0,
        }
    }

    /// Builds a game by applying cell indices in order.
    ///
    /// Moves the rules ignore are skipped. Out-of-range indices abort the
    /// replay.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        game.apply_moves(cells)?;
        Ok(game)
    }

    /// Applies cell indices in order and returns one outcome per index.
    ///
    /// Ignored moves are logged and skipped. The first contract error stops
    /// the sequence, leaving the moves before it applied.
    #[instrument(skip(self))]
    pub fn apply_moves(&mut self, cells: &[usize]) -> Result<Vec<MoveOutcome>, GameError> {
        let mut outcomes = Vec::with_capacity(cells.len());
        for &cell in cells {
            let outcome = self.apply_move(cell)?;
            if let MoveOutcome::Ignored(reason) = &outcome {
                warn!(cell, %reason, "Skipping ignored move");
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Index of the newest snapshot.
    pub fn latest_move(&self) -> usize {
        self.history.len() - 1
    }

    /// The snapshot on display.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.current_move]
    }

    /// True when X places the next mark.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The mark the next move will place.
    pub fn next_mark(&self) -> Mark {
        if self.is_x_next() { Mark::X } else { Mark::O }
    }

    /// Win verdict for the snapshot on display.
    pub fn winner(&self) -> WinnerResult {
        rules::evaluate(self.current_snapshot())
    }

    /// Status line for the snapshot on display.
    pub fn status(&self) -> Status {
        let board = self.current_snapshot();
        rules::status(board, &rules::evaluate(board), self.is_x_next())
    }

    /// One entry per snapshot, for jumping back and forth.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len()).map(MoveEntry::new).collect()
    }

    /// Places the next mark at `cell_index` on the displayed board.
    ///
    /// Any snapshots after the displayed one are discarded first. Occupied
    /// cells and finished games yield [`MoveOutcome::Ignored`] and leave the
    /// state untouched. Debug builds check the history invariants on the new
    /// state before committing it; a violation is returned as an error and
    /// nothing changes.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<MoveOutcome, GameError> {
        let position = Position::from_index(cell_index)
            .ok_or(GameError::CellOutOfBounds { index: cell_index })?;
        self.apply_position(position)
    }

    /// [`apply_move`](Self::apply_move) for a known-valid position.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_position(&mut self, position: Position) -> Result<MoveOutcome, GameError> {
        let board = *self.current_snapshot();

        if !board.is_empty(position) {
            debug!(%position, "Cell occupied, ignoring move");
            return Ok(MoveOutcome::Ignored(IgnoreReason::Occupied(position)));
        }

        if let WinnerResult::Winner { mark, .. } = rules::evaluate(&board) {
            debug!(%mark, "Game already won, ignoring move");
            return Ok(MoveOutcome::Ignored(IgnoreReason::GameOver(mark)));
        }

        let mark = self.next_mark();
        let next = board.with_mark(position, mark);

        let mut history = self.history[..=self.current_move].to_vec();
        history.push(next);
        let candidate = Self {
            current_move: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        HistoryInvariants::check_all(&candidate).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            info!(discarded, "Branching from earlier move, dropping later snapshots");
        }
        *self = candidate;

        debug!(move_number = self.current_move, %mark, %position, "Move applied");
        Ok(MoveOutcome::Applied {
            move_number: self.current_move,
            mark,
            position,
        })
    }

    /// Displays snapshot `index` without changing history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.history.len() {
            return Err(GameError::MoveOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.current_move = index;
        debug!(index, "Jumped");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Snapshot>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
