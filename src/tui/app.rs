//! Application state and key handling.

use crate::games::tictactoe::{move_list, GameHistory, MoveEntry, Position, SortOrder};
use crate::settings::Settings;
use crossterm::event::KeyCode;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

use super::input::{cell_for_digit, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select an entry of the move list.
    Moves,
}

/// Something on screen the user clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board cell.
    Cell(Position),
    /// Row `n` of the move list as displayed.
    MoveRow(usize),
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    game: GameHistory,
    /// Board cell under the keyboard cursor.
    cursor: Position,
    /// Pane receiving navigation keys.
    focus: Focus,
    /// Move list order.
    order: SortOrder,
    /// Step highlighted in the move list.
    selected_step: usize,
    /// Highlight the winning line.
    highlight_winning_line: bool,
    /// Show `([row, col])` in the move list.
    show_coordinates: bool,
    /// Set once the user asks to quit.
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            order: *settings.history_order(),
            selected_step: 0,
            highlight_winning_line: *settings.highlight_winning_line(),
            show_coordinates: *settings.show_coordinates(),
            should_quit: false,
        }
    }

    /// Move list as currently displayed.
    pub fn entries(&self) -> Vec<MoveEntry> {
        move_list(&self.game, self.order, self.show_coordinates)
    }

    /// Row of the move list holding the selected step.
    pub fn selected_row(&self) -> usize {
        self.row_of(self.selected_step)
    }

    /// Row of the move list holding the step currently shown.
    pub fn current_row(&self) -> usize {
        self.row_of(self.game.current_step())
    }

    fn row_of(&self, step: usize) -> usize {
        match self.order {
            SortOrder::Ascending => step,
            SortOrder::Descending => self.game.len() - 1 - step,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('s') => {
                self.order = self.order.toggle();
                debug!(order = self.order.label(), "Move list order toggled");
            }
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('[') => {
                if self.game.undo() {
                    self.sync_selection();
                }
            }
            KeyCode::Char(']') => {
                if self.game.redo() {
                    self.sync_selection();
                }
            }
            code => {
                if let Some(pos) = cell_for_digit(code) {
                    self.cursor = pos;
                    self.play(pos);
                    return;
                }
                match self.focus {
                    Focus::Board => self.handle_board_key(code),
                    Focus::Moves => self.handle_moves_key(code),
                }
            }
        }
    }

    /// Handles a left click on a board cell or a move list row.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Cell(pos) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.play(pos);
            }
            ClickTarget::MoveRow(row) => {
                if let Some(entry) = self.entries().get(row) {
                    self.focus = Focus::Moves;
                    self.jump_to(entry.step);
                }
            }
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let row = self.selected_row();
        let last = self.game.len() - 1;
        let row = match code {
            KeyCode::Up | KeyCode::Char('k') => row.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (row + 1).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.jump_to(self.selected_step);
                return;
            }
            _ => return,
        };
        if let Some(entry) = self.entries().get(row) {
            self.selected_step = entry.step;
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        };
        self.sync_selection();
    }

    /// Plays at `pos`. Rejected moves change nothing.
    fn play(&mut self, pos: Position) {
        match self.game.play(pos) {
            Ok(step) => {
                if let Some(placement) = step.placement() {
                    debug!(%placement, "Move played");
                }
                self.sync_selection();
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    fn jump_to(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.sync_selection(),
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }

    fn sync_selection(&mut self) {
        self.selected_step = self.game.current_step();
    }

    /// Restarts the game, keeping display preferences.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameHistory::new();
        self.cursor = Position::Center;
        self.selected_step = 0;
    }
}
