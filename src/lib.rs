//! Timeline tic-tac-toe - a terminal game with move history and time travel
//!
//! # Architecture
//!
//! - **Games**: pure tic-tac-toe rules and the time-travelling history
//! - **Settings**: display preferences loaded from TOML
//! - **Replay**: non-interactive replay of cell sequences
//! - **TUI**: ratatui front end driven by keyboard and mouse
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameHistory, Player, Position};
//!
//! let mut game = GameHistory::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     game.play(pos).unwrap();
//! }
//! game.jump_to(1).unwrap();
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod replay;
mod settings;
pub mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    evaluate, move_list, status_line, Board, GameHistory, Line, MoveEntry, MoveError,
    Outcome, Placement, Player, Position, SortOrder, Square, Step, WINNING_LINES,
};

// Crate-level exports - Rule helpers and invariants
pub use games::tictactoe::invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use games::tictactoe::rules::{check_winner, is_full};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Replay
pub use replay::{replay_cells, transcript, SkippedMove};
