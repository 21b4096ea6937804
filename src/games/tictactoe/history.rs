//! Game state container with a linear, time-travelling history.
//!
//! The history is a list of board snapshots. A cursor (the current step)
//! selects which snapshot is shown. Moving the cursor back is
//! non-destructive; playing a move from an earlier step discards every
//! step after it before appending the new one.

use super::action::{MoveError, Placement, Step};
use super::invariants::assert_invariants;
use super::{rules, Board, Outcome, Player, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe game with move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(super) steps: Vec<Step>,
    pub(super) current: usize,
    pub(super) to_move: Player,
}

impl GameHistory {
    /// Creates a new game at the empty opening board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            steps: vec![Step::start()],
            current: 0,
            to_move: Player::X,
        }
    }

    /// Every recorded step, including any beyond the current one.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of recorded steps (never zero).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: the opening step is never removed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the step currently shown.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// The step currently shown.
    pub fn current(&self) -> &Step {
        &self.steps[self.current]
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Outcome of the board at the current step, if decided.
    #[instrument(skip(self), fields(step = self.current))]
    pub fn outcome(&self) -> Option<Outcome> {
        rules::evaluate(self.board())
    }

    /// Whether the current step is the newest one recorded.
    pub fn at_latest(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Empty positions at the current step, or none if the game is decided.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.board())
    }

    /// Plays the next player's mark at `position` from the current step.
    ///
    /// Steps after the current one are discarded before the new step is
    /// appended. A rejected move leaves the history unchanged.
    #[instrument(skip(self), fields(step = self.current, player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<&Step, MoveError> {
        if self.outcome().is_some() {
            debug!("Move rejected, game already decided");
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(position) {
            debug!("Move rejected, square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let next = self.current().after(Placement::new(self.to_move, position));
        let discarded = self.steps.len() - (self.current + 1);
        self.steps.truncate(self.current + 1);
        self.steps.push(next);
        self.current += 1;
        self.to_move = self.to_move.opponent();
        debug!(discarded, new_step = self.current, "Move applied");

        assert_invariants(self);
        Ok(self.current())
    }

    /// Moves the cursor to `step` without touching the recorded steps.
    ///
    /// The player to move is recomputed from the parity of `step`.
    #[instrument(skip(self), fields(from = self.current))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.steps.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.steps.len(),
            });
        }
        self.current = step;
        self.to_move = Player::for_step(step);
        debug!(to = step, "Jumped through history");

        assert_invariants(self);
        Ok(())
    }

    /// Steps one move back. Returns false at the opening board.
    pub fn undo(&mut self) -> bool {
        self.current
            .checked_sub(1)
            .is_some_and(|step| self.jump_to(step).is_ok())
    }

    /// Steps one move forward. Returns false at the newest step.
    pub fn redo(&mut self) -> bool {
        !self.at_latest() && self.jump_to(self.current + 1).is_ok()
    }

    /// Replays `positions` from a new game, stopping at the first rejected move.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for position in positions {
            game.play(*position)?;
        }
        Ok(game)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
