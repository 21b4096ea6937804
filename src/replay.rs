//! Non-interactive replay of a sequence of cell numbers.

use crate::games::tictactoe::{move_list, status_line, GameHistory, Position};
use crate::settings::Settings;
use tracing::{instrument, warn};

/// Why a requested cell was skipped during replay.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SkippedMove {
    /// Cell number outside 1-9.
    #[display("move {}: cell {} is not on the board (use 1-9)", index, cell)]
    OffBoard {
        /// 1-based position in the input sequence.
        index: usize,
        /// Requested cell.
        cell: usize,
    },
    /// The game rejected the move.
    #[display("move {}: cell {} rejected: {}", index, cell, reason)]
    Rejected {
        /// 1-based position in the input sequence.
        index: usize,
        /// Requested cell.
        cell: usize,
        /// Rejection reason.
        reason: String,
    },
}

/// Plays 1-based `cells` in order from an empty board.
///
/// Moves that are off the board or rejected are skipped and reported.
#[instrument]
pub fn replay_cells(cells: &[usize]) -> (GameHistory, Vec<SkippedMove>) {
    let mut game = GameHistory::new();
    let mut skipped = Vec::new();

    for (i, &cell) in cells.iter().enumerate() {
        let index = i + 1;
        let Some(pos) = Position::from_cell_number(cell) else {
            skipped.push(SkippedMove::OffBoard { index, cell });
            continue;
        };
        if let Err(e) = game.play(pos) {
            skipped.push(SkippedMove::Rejected {
                index,
                cell,
                reason: e.to_string(),
            });
        }
    }

    for s in &skipped {
        warn!(skipped = %s, "Replay move skipped");
    }
    (game, skipped)
}

/// Text rendering of `game`: board, status line and move list.
///
/// The current step is marked with `*`.
pub fn transcript(game: &GameHistory, settings: &Settings) -> String {
    let mut out = game.board().display();
    out.push_str("\n\n");
    out.push_str(&status_line(game));
    out.push_str("\n\n");
    for entry in move_list(game, *settings.history_order(), *settings.show_coordinates()) {
        let marker = if entry.is_current { '*' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_bad_cells() {
        let (game, skipped) = replay_cells(&[5, 5, 0, 1]);
        assert_eq!(game.len(), 3);
        assert_eq!(skipped.len(), 2);
        assert!(matches!(skipped[0], SkippedMove::Rejected { index: 2, cell: 5, .. }));
        assert_eq!(skipped[1], SkippedMove::OffBoard { index: 3, cell: 0 });
    }

    #[test]
    fn test_transcript() {
        let (game, _) = replay_cells(&[1, 5]);
        let text = transcript(&game, &Settings::default());
        assert_eq!(
            text,
            "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9\n\nNext player: X\n\n  Go to game start\n  Go to move #1 ([1, 1])\n* Go to move #2 ([2, 2])\n"
        );
    }
}
