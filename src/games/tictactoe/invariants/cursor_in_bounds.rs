//! Cursor invariant: the current step always indexes a recorded step.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: history is non-empty and the current step is within it.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        !game.steps.is_empty() && game.current < game.steps.len()
    }

    fn description() -> &'static str {
        "Current step is a valid index into the history"
    }
}
