//! History entries and the errors raised when changing them.

use super::{Board, Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Placement {
    /// 1-based row of the placed mark.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// 1-based column of the placed mark.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// One entry of the game history: a board snapshot and the move that made it.
///
/// The opening step has no placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    board: Board,
    placement: Option<Placement>,
}

impl Step {
    /// The empty opening board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            placement: None,
        }
    }

    /// Derives the step that follows `self` when `placement` is played.
    pub(super) fn after(&self, placement: Placement) -> Self {
        Self {
            board: self.board.with_mark(placement.position, placement.player),
            placement: Some(placement),
        }
    }

    /// Board snapshot at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this step, if any.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Error that can occur when applying a move or travelling through history.
///
/// Every variant leaves the history exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game at the current step is already decided.
    #[display("Game is already over")]
    GameOver,

    /// Requested step is past the end of the history.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
