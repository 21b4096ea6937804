//! Alternating turn invariant: X on even steps, O on odd steps.

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: the player to move follows the parity of the current step,
/// and every recorded placement follows the parity of its own step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(game: &GameHistory) -> bool {
        let placements_alternate = game
            .steps()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, step)| {
                step.placement()
                    .is_some_and(|p| p.player == Player::for_step(i - 1))
            });

        placements_alternate && game.to_move() == Player::for_step(game.current_step())
    }

    fn description() -> &'static str {
        "Players alternate X, O, X, ... and the next player matches step parity"
    }
}
