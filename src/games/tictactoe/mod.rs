//! Tic-tac-toe with a time-travelling move history.

mod action;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod timeline;
mod types;

pub use action::{MoveError, Placement, Step};
pub use history::GameHistory;
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{evaluate, Line, WINNING_LINES};
pub use timeline::{move_list, status_line, MoveEntry, SortOrder};
pub use types::{Board, Player, Square};
