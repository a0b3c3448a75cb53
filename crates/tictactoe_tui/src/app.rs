//! Application state and key handling.

use super::input::{digit_to_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_history::{GameState, MoveOutcome, Position};
use tracing::{debug, error, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move over the board.
    #[default]
    Board,
    /// Arrow keys move over the move list.
    History,
}

impl Focus {
    /// Switches between the two panels.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the terminal.
    Quit,
}

/// Main application state.
///
/// Owns the one [`GameState`] of the session. A new game replaces it.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_entry: usize,
    message: String,
}

impl App {
    /// Creates a new application at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_entry: 0,
            message: "X moves first. Arrows + Enter or 1-9 to play.".to_string(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row of the move list.
    pub fn selected_entry(&self) -> usize {
        self.selected_entry
    }

    /// Feedback from the last action.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_to_position(c) {
                    self.cursor = pos;
                    self.select_cell(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.select_cell(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.latest_move();
        match key {
            KeyCode::Up => self.selected_entry = self.selected_entry.saturating_sub(1),
            KeyCode::Down => self.selected_entry = (self.selected_entry + 1).min(last),
            KeyCode::Home => self.selected_entry = 0,
            KeyCode::End => self.selected_entry = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.select_history(self.selected_entry),
            _ => {}
        }
    }

    /// Places the next mark at `pos` on the displayed board.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, pos: Position) {
        match self.game.apply_position(pos) {
            Ok(MoveOutcome::Applied {
                move_number, mark, ..
            }) => {
                debug!(move_number, %mark, "Move applied to UI state");
                self.selected_entry = move_number;
                let status = self.game.status();
                self.message = if status.is_over() {
                    info!(%status, "Game over");
                    format!("{} played {}. {}. Press n for a new game.", mark, pos.label(), status)
                } else {
                    format!("{} played {}", mark, pos.label())
                };
            }
            Ok(MoveOutcome::Ignored(reason)) => {
                debug!(%reason, "Move ignored");
                self.message = format!("{}.", reason);
            }
            Err(e) => {
                error!(error = %e, "Move rejected");
                self.message = format!("Move error: {}", e);
            }
        }
    }

    /// Displays history entry `index`.
    #[instrument(skip(self))]
    pub fn select_history(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => {
                self.selected_entry = index;
                self.message = if index == 0 {
                    "Showing game start".to_string()
                } else {
                    format!("Showing move #{}", index)
                };
            }
            Err(e) => {
                error!(error = %e, "Jump rejected");
                self.message = format!("Jump error: {}", e);
            }
        }
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!("Restarting game");
        *self = Self {
            message: "New game. X moves first.".to_string(),
            ..Self::new()
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_history::{Mark, Status};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), AppAction::Continue);
        }
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.game().current_move(), 2);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.message(), "O played Center");
    }

    #[test]
    fn test_arrows_and_enter_place_mark() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.game().current_snapshot().get(Position::TopLeft),
            tictactoe_history::Cell::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_occupied_cell_reports_reason() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.message(), "Center is already occupied.");
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new();
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('4'), KeyCode::Char('2')],
        );
        assert_eq!(app.selected_entry(), 3);

        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.message(), "Showing move #1");

        press(&mut app, &[KeyCode::Home, KeyCode::Enter]);
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.message(), "Showing game start");

        press(&mut app, &[KeyCode::End, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.game().current_move(), 3);
    }

    #[test]
    fn test_move_after_jump_branches() {
        let mut app = App::new();
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('4'), KeyCode::Char('2')],
        );
        app.select_history(1);
        press(&mut app, &[KeyCode::Char('9')]);

        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.selected_entry(), 2);
        assert_eq!(app.game().status(), Status::NextPlayer(Mark::X));
    }

    #[test]
    fn test_finishing_move_announces_result() {
        let mut app = App::new();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('4'),
                KeyCode::Char('2'),
                KeyCode::Char('5'),
                KeyCode::Char('3'),
            ],
        );
        assert_eq!(
            app.message(),
            "X played Top-right. Winner: X. Press n for a new game."
        );

        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.message(), "X has already won.");
    }

    #[test]
    fn test_drawn_game_announces_draw() {
        let mut app = App::new();
        let keys: Vec<_> = "123574698".chars().map(KeyCode::Char).collect();
        press(&mut app, &keys);
        assert_eq!(app.game().status(), Status::Draw);
        assert_eq!(
            app.message(),
            "X played Bottom-right. Draw. Press n for a new game."
        );
    }

    #[test]
    fn test_new_game_and_quit() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Tab, KeyCode::Char('n')]);
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.message(), "New game. X moves first.");

        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}
