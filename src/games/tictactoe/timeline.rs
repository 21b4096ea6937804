//! Presentation of the history: move list entries and the status line.

use super::GameHistory;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub description: String,
    /// Whether this is the step currently shown.
    pub is_current: bool,
}

/// Builds the move list for `game` in the given order.
///
/// Step 0 reads "Go to game start"; later steps read "Go to move #n",
/// followed by the 1-based `([row, col])` of the move when
/// `show_coordinates` is set.
#[instrument(skip(game), fields(steps = game.len()))]
pub fn move_list(game: &GameHistory, order: SortOrder, show_coordinates: bool) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = game
        .steps()
        .iter()
        .enumerate()
        .map(|(step, entry)| {
            let description = match entry.placement() {
                None => "Go to game start".to_string(),
                Some(p) if show_coordinates => {
                    format!("Go to move #{} ([{}, {}])", step, p.row(), p.col())
                }
                Some(_) => format!("Go to move #{}", step),
            };
            MoveEntry {
                step,
                description,
                is_current: step == game.current_step(),
            }
        })
        .collect();

    if order == SortOrder::Descending {
        entries.reverse();
    }
    entries
}

/// Status line for the current step: winner, draw, or next player.
pub fn status_line(game: &GameHistory) -> String {
    match game.outcome() {
        Some(outcome) if outcome.is_draw() => "Draw".to_string(),
        Some(outcome) => outcome.to_string(),
        None => format!("Next player: {}", game.to_move()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn descriptions(entries: &[MoveEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_new_game_list() {
        let game = GameHistory::new();
        let entries = move_list(&game, SortOrder::Ascending, true);
        assert_eq!(descriptions(&entries), ["Go to game start"]);
        assert!(entries[0].is_current);
    }

    #[test]
    fn test_coordinates_are_one_based() {
        let game = GameHistory::replay(&[Position::Center, Position::BottomLeft]).unwrap();
        let entries = move_list(&game, SortOrder::Ascending, true);
        assert_eq!(
            descriptions(&entries),
            [
                "Go to game start",
                "Go to move #1 ([2, 2])",
                "Go to move #2 ([3, 1])"
            ]
        );
    }

    #[test]
    fn test_descending_marks_current() {
        let mut game = GameHistory::replay(&[Position::Center, Position::BottomLeft]).unwrap();
        game.jump_to(1).unwrap();
        let entries = move_list(&game, SortOrder::Descending, false);
        assert_eq!(
            descriptions(&entries),
            ["Go to move #2", "Go to move #1", "Go to game start"]
        );
        let current: Vec<usize> = entries.iter().filter(|e| e.is_current).map(|e| e.step).collect();
        assert_eq!(current, [1]);
    }

    #[test]
    fn test_status_lines() {
        let mut game = GameHistory::new();
        assert_eq!(status_line(&game), "Next player: X");
        game.play(Position::Center).unwrap();
        assert_eq!(status_line(&game), "Next player: O");

        let won = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ])
        .unwrap();
        assert_eq!(status_line(&won), "Winner: X");

        let drawn = GameHistory::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .unwrap();
        assert_eq!(status_line(&drawn), "Draw");
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::default().toggle().toggle(), SortOrder::Ascending);
    }
}
