//! History-tracking game engine for tic-tac-toe.
//!
//! The engine owns every snapshot reached in the current game and a
//! pointer into that list. Jumping moves the pointer without touching
//! history; placing a mark after a jump discards the snapshots past the
//! pointer before recording the new one.

use crate::action::{Action, IllegalMove, MoveOutcome};
use crate::error::EngineError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{self, Win};
use crate::{Board, Player, Position, Snapshot};
use tracing::{debug, instrument, warn};

/// Status line for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner yet; the given player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    /// History index this row jumps to.
    pub step: usize,
    /// Mark shown in the row text (`mover_at(step)`), absent for the start row.
    pub player: Option<Player>,
    /// Last move of the snapshot at `step`.
    pub position: Option<Position>,
    /// Whether `step` is the engine's current step.
    pub is_current: bool,
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.step, self.player, self.position) {
            (step, Some(player), Some(pos)) if step > 0 => write!(
                f,
                "Move #{} ({} in position {})",
                step,
                player,
                pos.to_index()
            ),
            _ => f.write_str("Game start"),
        }
    }
}

/// Tic-tac-toe game engine with move history and time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) step: usize,
    pub(crate) sort_descending: bool,
}

impl GameEngine {
    /// Creates a new game at the initial snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            step: 0,
            sort_descending: true,
        }
    }

    /// Sets the initial move list display flag.
    pub fn with_sort_descending(mut self, sort_descending: bool) -> Self {
        self.sort_descending = sort_descending;
        self
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the mark of the player to move at `pos`.
    ///
    /// Ignored when the current board already has a winner or the square is
    /// taken. Otherwise any snapshots past the current step are discarded,
    /// the new snapshot is appended, and the pointer moves to it.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn attempt_move(&mut self, pos: Position) -> MoveOutcome {
        let current = *self.current_snapshot();

        if let Some(win) = rules::check_winner(current.board()) {
            debug!(winner = %win.player, "Move ignored, game already won");
            return MoveOutcome::Ignored(IllegalMove::GameOver(win.player));
        }

        if !current.board().is_empty(pos) {
            debug!("Move ignored, square occupied");
            return MoveOutcome::Ignored(IllegalMove::SquareOccupied(pos));
        }

        let player = self.to_move();
        let discarded = self.history.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots past current step");
        }
        self.history.truncate(self.step + 1);
        self.history.push(current.advance(pos, player));
        self.step = self.history.len() - 1;

        debug!(player = %player, new_step = self.step, "Move applied");
        self.debug_check_invariants();

        MoveOutcome::Applied {
            step: self.step,
            player,
        }
    }

    /// Moves the pointer to a recorded step without changing history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStep`] if `step` is past the last snapshot.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        if step >= self.history.len() {
            warn!("Jump target out of range");
            return Err(EngineError::InvalidStep {
                step,
                len: self.history.len(),
            });
        }

        self.step = step;
        debug!(to_move = %self.to_move(), "Jumped");
        self.debug_check_invariants();
        Ok(())
    }

    /// Flips the move list display flag.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_descending = !self.sort_descending;
        debug!(sort_descending = self.sort_descending, "Sort order toggled");
    }

    /// Dispatches an [`Action`].
    ///
    /// Placements report their [`MoveOutcome`]; the other actions return `None`.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError::InvalidStep`] from jumps.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Result<Option<MoveOutcome>, EngineError> {
        match action {
            Action::Place(pos) => Ok(Some(self.attempt_move(pos))),
            Action::JumpTo(step) => self.jump_to(step).map(|()| None),
            Action::ToggleSortOrder => {
                self.toggle_sort_order();
                Ok(None)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the snapshot at the current step.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Returns the last move of the current snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.current_snapshot().last_move()
    }

    /// Evaluates any board for a completed line.
    pub fn evaluate_winner(board: &Board) -> Option<Win> {
        rules::check_winner(board)
    }

    /// Winner (and winning line) of the current board.
    pub fn winner(&self) -> Option<Win> {
        Self::evaluate_winner(self.board())
    }

    /// Player to move at the current step.
    pub fn to_move(&self) -> Player {
        rules::mover_at(self.step)
    }

    /// Status line for the current step.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn display_status(&self) -> Status {
        match self.winner() {
            Some(win) => Status::Winner(win.player),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Move list in display order.
    ///
    /// Rows are in history order while the sort flag is set and reversed
    /// when it is cleared. Stored history is never reordered.
    #[instrument(skip(self), fields(sort_descending = self.sort_descending))]
    pub fn move_descriptions(&self) -> Vec<MoveDescription> {
        let mut rows: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveDescription {
                step,
                player: (step > 0).then(|| rules::mover_at(step)),
                position: snapshot.last_move(),
                is_current: step == self.step,
            })
            .collect();

        if !self.sort_descending {
            rows.reverse();
        }
        rows
    }

    /// Label for the sort toggle: "descending" while the flag is set.
    pub fn sort_label(&self) -> &'static str {
        if self.sort_descending {
            "descending"
        } else {
            "ascending"
        }
    }

    /// Returns the move list display flag.
    pub fn is_sort_descending(&self) -> bool {
        self.sort_descending
    }

    /// Returns the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns every recorded snapshot in order.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of recorded snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Whether the pointer is at the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            panic!("Engine invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
