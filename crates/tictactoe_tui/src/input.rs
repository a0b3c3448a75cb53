//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use tictactoe_history::Position;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the edges instead of wrapping.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps keypad digits `1`-`9` to positions, left to right and top to bottom.
pub fn digit_to_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_to_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_to_position('5'), Some(Position::Center));
        assert_eq!(digit_to_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_to_position('0'), None);
        assert_eq!(digit_to_position('x'), None);
    }
}
