//! Win detection for tic-tac-toe.

use super::super::{Cell, Mark, Position, Snapshot};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// One of the eight lines that win the game when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum WinLine {
    /// Cells 0, 1, 2
    TopRow,
    /// Cells 3, 4, 5
    MiddleRow,
    /// Cells 6, 7, 8
    BottomRow,
    /// Cells 0, 3, 6
    LeftColumn,
    /// Cells 1, 4, 7
    CenterColumn,
    /// Cells 2, 5, 8
    RightColumn,
    /// Cells 0, 4, 8
    Diagonal,
    /// Cells 2, 4, 6
    AntiDiagonal,
}

impl WinLine {
    /// All lines in evaluation order: rows, columns, diagonals.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::Diagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::Diagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices on this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Verdict of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinnerResult {
    /// No line is uniformly marked.
    NoWinner,
    /// `mark` holds every cell of `line`.
    Winner {
        /// The winning mark.
        mark: Mark,
        /// The first winning line in evaluation order.
        line: WinLine,
    },
}

impl WinnerResult {
    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            WinnerResult::Winner { line, .. } => Some(*line),
            WinnerResult::NoWinner => None,
        }
    }
}

/// Checks the board against the eight winning lines.
///
/// Lines are tried in [`WinLine::ALL`] order and the first uniformly
/// marked one is returned.
#[instrument(skip(board))]
pub fn evaluate(board: &Snapshot) -> WinnerResult {
    for line in WinLine::ALL {
        let [a, b, c] = line.positions();
        if let Cell::Occupied(mark) = board.get(a)
            && board.get(b) == Cell::Occupied(mark)
            && board.get(c) == Cell::Occupied(mark)
        {
            return WinnerResult::Winner { mark, line };
        }
    }

    WinnerResult::NoWinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Snapshot::new()), WinnerResult::NoWinner);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Snapshot = "XXX/OO./...".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            WinnerResult::Winner {
                mark: Mark::X,
                line: WinLine::TopRow,
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Snapshot = "X.O/XO./O.X".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            WinnerResult::Winner {
                mark: Mark::O,
                line: WinLine::AntiDiagonal,
            }
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Snapshot = "XX./.O./...".parse().unwrap();
        assert_eq!(evaluate(&board), WinnerResult::NoWinner);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Not reachable in play, but the tie-break is still defined.
        let board: Snapshot = "XXX/OOO/...".parse().unwrap();
        assert_eq!(evaluate(&board).line(), Some(WinLine::TopRow));
    }

    #[test]
    fn test_line_indices() {
        assert_eq!(WinLine::CenterColumn.indices(), [1, 4, 7]);
        assert_eq!(WinLine::AntiDiagonal.indices(), [2, 4, 6]);
        assert!(WinLine::Diagonal.contains(Position::Center));
        assert!(!WinLine::Diagonal.contains(Position::TopRight));
    }

    #[test]
    fn test_all_matches_declaration_order() {
        use strum::IntoEnumIterator;

        let iterated: Vec<_> = WinLine::iter().collect();
        assert_eq!(iterated, WinLine::ALL);
    }
}
