//! Result of evaluating a board.

use super::rules::Line;
use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a decided game.
///
/// An undecided board has no outcome at all (`Option<Outcome>` is `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner {
        /// The winning mark.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
