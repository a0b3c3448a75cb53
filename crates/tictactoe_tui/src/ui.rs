//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Focus};
use super::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_history::{Cell, Mark, Position, Snapshot, WinLine};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + history
            Constraint::Length(4), // Status + message
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let game = app.game();
    let winning_line = game.winner().line();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    draw_board(frame, body[0], game.current_snapshot(), cursor, winning_line, palette);
    draw_history(frame, body[1], app);

    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            game.status().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(app.message()),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9/arrows+Enter: play  Tab: history  n: new game  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Snapshot,
    cursor: Option<Position>,
    winning_line: Option<WinLine>,
    palette: &Palette,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                let highlighted = winning_line.is_some_and(|line| line.contains(pos));
                let cell = CellView {
                    cell: board.get(pos),
                    label: pos.to_index() + 1,
                    under_cursor: cursor == Some(pos),
                    highlighted,
                };
                draw_cell(frame, cols[col * 2], &cell, palette);
            }
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }

        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

struct CellView {
    cell: Cell,
    label: usize,
    under_cursor: bool,
    highlighted: bool,
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &CellView, palette: &Palette) {
    let (symbol, mut style) = match view.cell {
        Cell::Empty => (view.label.to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    if view.highlighted {
        style = style.bg(palette.highlight);
    }
    if view.under_cursor {
        style = style.bg(palette.cursor).fg(Color::Black);
    }

    // Pad vertically so the symbol sits in the middle of the 3-line cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text)
        .style(if view.highlighted || view.under_cursor { style } else { Style::default() })
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let current = game.current_move();

    let items: Vec<ListItem> = game
        .move_list()
        .into_iter()
        .map(|entry| {
            if entry.index == current {
                ListItem::new(format!("{} (current)", entry.label))
                    .style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(entry.label)
            }
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("History")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected_entry()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
