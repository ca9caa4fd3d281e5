//! First-class action types for tic-tac-toe.
//!
//! Actions are the commands a presentation layer sends to the engine.
//! They can be parsed, logged, and replayed independently of execution.

use crate::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A command for the [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the mark of the player to move at a position.
    Place(Position),
    /// Move the position pointer to a recorded history step.
    JumpTo(usize),
    /// Flip the move list display order.
    ToggleSortOrder,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "{}", pos.to_index()),
            Action::JumpTo(step) => write!(f, "jump:{}", step),
            Action::ToggleSortOrder => f.write_str("toggle"),
        }
    }
}

/// Error parsing an [`Action`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid action '{}': expected a cell 0-8, 'jump:<step>' or 'toggle'", input)]
pub struct ActionParseError {
    /// The rejected input.
    #[error(not(source))]
    pub input: String,
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ActionParseError {
            input: s.to_string(),
        };

        if s.eq_ignore_ascii_case("toggle") {
            return Ok(Action::ToggleSortOrder);
        }

        if let Some(step) = s.strip_prefix("jump:") {
            return step.parse().map(Action::JumpTo).map_err(|_| err());
        }

        s.parse::<usize>()
            .ok()
            .and_then(Position::from_index)
            .map(Action::Place)
            .ok_or_else(err)
    }
}

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}

/// What happened to a placement.
///
/// Illegal placements leave the engine untouched; this value only
/// reports which case applied and may be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded at `step`.
    Applied {
        /// History index of the new snapshot.
        step: usize,
        /// Player whose mark was placed.
        player: Player,
    },
    /// The move was ignored.
    Ignored(IllegalMove),
}

impl MoveOutcome {
    /// Whether the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}
