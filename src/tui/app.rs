//! Application state and key handling.

use super::input::{cell_for_digit, direction_for};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameEngine, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board cursor.
    Board,
    /// Arrows move the move list selection.
    History,
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
}

impl App {
    /// Creates an application driving `engine`.
    pub fn new(engine: GameEngine) -> Self {
        let selected_step = engine.step();
        Self {
            engine,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Row of the move list (in display order) holding the selected step.
    pub fn selected_row(&self) -> usize {
        self.engine
            .move_descriptions()
            .iter()
            .position(|d| d.step == self.selected_step)
            .unwrap_or(0)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('s') => self.engine.toggle_sort_order(),
            key => match (cell_for_digit(key), self.focus) {
                (Some(pos), _) => {
                    self.cursor = pos;
                    self.place(pos);
                }
                (None, Focus::Board) => self.handle_board_key(key),
                (None, Focus::History) => self.handle_history_key(key),
            },
        }
        Flow::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        if let Some(direction) = direction_for(key) {
            self.cursor = self.cursor.step(direction);
        } else if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
            self.place(self.cursor);
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let rows = self.engine.move_descriptions();
        let row = self.selected_row();
        match key {
            KeyCode::Up => {
                self.selected_step = rows[row.saturating_sub(1)].step;
            }
            KeyCode::Down => {
                self.selected_step = rows[(row + 1).min(rows.len() - 1)].step;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(e) = self.engine.jump_to(self.selected_step) {
                    warn!(error = %e, "Jump rejected");
                }
            }
            _ => {}
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_step = self.engine.step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus switched");
    }

    fn place(&mut self, pos: Position) {
        match self.engine.attempt_move(pos) {
            MoveOutcome::Applied { step, player } => {
                debug!(%player, %pos, step, "Move placed");
                self.selected_step = step;
            }
            MoveOutcome::Ignored(reason) => {
                debug!(%reason, "Move ignored");
            }
        }
    }
}
