//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// X always moves first.
    X,
    /// O moves second.
    O,
}

impl Mark {
    /// Mark that produces history entry `index` (index 0 is the empty start).
    ///
    /// Returns `None` for index 0 since nobody moved to produce it.
    pub fn for_history_index(index: usize) -> Option<Self> {
        match index {
            0 => None,
            i if (i - 1) % 2 == 0 => Some(Mark::X),
            _ => Some(Mark::O),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

/// Immutable 3x3 board at one point in the game.
///
/// Cells are stored in row-major order. Placing a mark never modifies a
/// snapshot in place; [`Snapshot::with_mark`] returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    cells: [Cell; 9],
}

impl Snapshot {
    /// The all-empty board that every game starts from.
    pub const EMPTY: Snapshot = Snapshot {
        cells: [Cell::Empty; 9],
    };

    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a snapshot from raw cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns a copy of this snapshot with `mark` placed at `pos`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Occupied(mark);
        Self { cells }
    }

    /// Formats the board as three text rows.
    ///
    /// Empty cells show their 1-based keypad number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push_str("\n-+-+-\n");
            } else if i % 3 != 0 {
                result.push('|');
            }
            match cell {
                Cell::Empty => result.push_str(&(i + 1).to_string()),
                Cell::Occupied(mark) => result.push_str(&mark.to_string()),
            }
        }
        result
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a snapshot from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotParseError {
    /// A character other than a mark, an empty marker, or a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(#[error(not(source))] char),
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}

impl FromStr for Snapshot {
    type Err = SnapshotParseError;

    /// Parses `"XOX/XOO/OXX"` style text.
    ///
    /// `X`/`O` (either case) are marks, `.`, `-` and `_` are empty cells,
    /// `/` and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                'X' | 'x' => cells.push(Cell::Occupied(Mark::X)),
                'O' | 'o' => cells.push(Cell::Occupied(Mark::O)),
                '.' | '-' | '_' => cells.push(Cell::Empty),
                '/' => {}
                c if c.is_whitespace() => {}
                c => return Err(SnapshotParseError::UnexpectedChar(c)),
            }
        }
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| SnapshotParseError::WrongLength(v.len()))?;
        Ok(Self { cells })
    }
}
