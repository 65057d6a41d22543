//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use replay_tictactoe::Position;

/// Moves the board cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to cells in reading order.
pub fn digit_cell(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}
