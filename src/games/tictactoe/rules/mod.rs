//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from the
//! history container so any snapshot, past or present, can be evaluated.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, Line, WINNING_LINES};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// Returns the winner and line if one is complete, [`Outcome::Draw`] if the
/// board is full otherwise, and `None` while the game is still open.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some((player, line)) = check_winner(board) {
        return Some(Outcome::Winner { player, line });
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
