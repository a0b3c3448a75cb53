//! Tests for scripted replay output.

use tictactoe_history::{GameError, GameState};
use tictactoe_tui::{ReplayError, render_transcript, run_replay};

#[test]
fn test_replay_win() {
    let out = run_replay(&[0, 3, 1, 4, 2], None).unwrap();

    assert!(out.starts_with("Move #1: X -> Top-left\n"));
    assert!(out.contains("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9"));
    assert!(out.contains("\nWinner: X\nWinning line: 0, 1, 2\n"));
    assert!(out.ends_with("> Go to move #5\n"));
}

#[test]
fn test_replay_reports_ignored_moves() {
    let out = run_replay(&[0, 4, 1, 2, 7, 2], None).unwrap();
    assert!(out.contains("Ignored: Top-right is already occupied\n"));
    assert!(out.contains("Next player: O"));
}

#[test]
fn test_replay_with_jump_marks_current_entry() {
    let out = run_replay(&[4, 0, 8], Some(1)).unwrap();
    assert!(out.contains("> Go to move #1\n"));
    assert!(out.contains("  Go to move #3\n"));
    assert!(out.contains("Next player: O"));
}

#[test]
fn test_replay_rejects_off_board_cell() {
    assert_eq!(
        run_replay(&[0, 9], None),
        Err(ReplayError::Game(GameError::CellOutOfBounds { index: 9 }))
    );
}

#[test]
fn test_transcript_for_draw() {
    let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    let out = render_transcript(&game);
    assert!(out.starts_with("X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X\n\nDraw\n\n"));
    assert!(!out.contains("Winning line"));
}
