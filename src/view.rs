//! Serializable read model of the engine for non-interactive output.

use rewind_tictactoe::{Action, EngineError, GameEngine, MoveOutcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRow {
    /// History step this row refers to.
    pub step: usize,
    /// Row text, e.g. `Move #2 (X in position 4)`.
    pub text: String,
    /// Whether this row is the current step.
    pub current: bool,
}

/// Everything a presentation layer shows, captured from a [`GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Marks in row-major order, `None` for empty squares.
    pub board: Vec<Option<Player>>,
    /// Status line.
    pub status: String,
    /// Winning player, if any.
    pub winner: Option<Player>,
    /// Winning line as board indices.
    pub winning_line: Option<[usize; 3]>,
    /// Current history step.
    pub step: usize,
    /// Player to move at the current step.
    pub to_move: Player,
    /// Last move of the current snapshot as a board index.
    pub last_move: Option<usize>,
    /// Move list in display order.
    pub moves: Vec<MoveRow>,
    /// Sort toggle label.
    pub sort_order: String,
}

impl GameView {
    /// Captures the engine's current queries.
    #[instrument(skip(engine), fields(step = engine.step()))]
    pub fn from_engine(engine: &GameEngine) -> Self {
        let win = engine.winner();
        Self {
            board: engine.board().squares().iter().map(|sq| sq.player()).collect(),
            status: engine.display_status().to_string(),
            winner: win.map(|w| w.player),
            winning_line: win.map(|w| w.line.map(Position::to_index)),
            step: engine.step(),
            to_move: engine.to_move(),
            last_move: engine.last_move().map(Position::to_index),
            moves: engine
                .move_descriptions()
                .iter()
                .map(|d| MoveRow {
                    step: d.step,
                    text: d.to_string(),
                    current: d.is_current,
                })
                .collect(),
            sort_order: engine.sort_label().to_string(),
        }
    }

    /// Plain-text rendering: board, status, then the move list.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, cell) in self.board.iter().enumerate() {
            if i % 3 == 0 && i > 0 {
                out.push_str("\n---+---+---\n");
            }
            match cell {
                Some(mark) => out.push_str(&format!(" {} ", mark)),
                None => out.push_str("   "),
            }
            if i % 3 < 2 {
                out.push('|');
            }
        }
        out.push_str(&format!("\n\n{}\n\n", self.status));
        for row in &self.moves {
            let marker = if row.current { '>' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, row.text));
        }
        out.push_str(&format!("Sorted in {} order\n", self.sort_order));
        out
    }
}

/// Applies `actions` to a fresh engine and captures the result.
///
/// Ignored placements are logged and skipped; an out-of-range jump aborts.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn play(actions: &[Action], sort_descending: bool) -> Result<GameView, EngineError> {
    let mut engine = GameEngine::new().with_sort_descending(sort_descending);
    for action in actions {
        if let Some(MoveOutcome::Ignored(reason)) = engine.apply(*action)? {
            debug!(%action, %reason, "Action had no effect");
        }
    }
    Ok(GameView::from_engine(&engine))
}
