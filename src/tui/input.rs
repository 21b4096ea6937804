//! Keyboard navigation on the board.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves the board cursor for arrow and `hjkl` keys, stopping at the edges.
///
/// Other keys leave the cursor where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1).max(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(3)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1).max(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(3), col),
        _ => (row, col),
    };

    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps `1`-`9` to the cell with that number.
pub fn cell_for_digit(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Position::from_cell_number(d as usize)),
        _ => None,
    }
}
