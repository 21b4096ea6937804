//! History consistency invariant: each step adds exactly one mark.

use super::super::{GameHistory, Position, Square};
use super::Invariant;

/// Invariant: step `i` holds exactly `i` marks, the opening step is empty
/// with no placement, and each later step differs from its predecessor only
/// at the placed square, which holds the placing player's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(game: &GameHistory) -> bool {
        let steps = game.steps();
        let Some(first) = steps.first() else {
            return false;
        };
        if first.placement().is_some() || first.board().occupied() != 0 {
            return false;
        }

        steps.windows(2).enumerate().all(|(i, pair)| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(placement) = next.placement() else {
                return false;
            };
            next.board().occupied() == i + 1
                && next.board().get(placement.position) == Square::Occupied(placement.player)
                && Position::ALL.iter().all(|pos| {
                    *pos == placement.position || prev.board().get(*pos) == next.board().get(*pos)
                })
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark to the previous step"
    }
}
