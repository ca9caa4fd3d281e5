//! Tic-tac-toe game logic with move history and time travel.
//!
//! [`GameEngine`] records every board reached in a game, lets a caller jump
//! back to any of them, and discards the abandoned future when a new move is
//! made after jumping. It performs no I/O; a presentation layer drives it
//! through [`Action`]s or the individual commands and redraws from its
//! queries.
//!
//! ```
//! use rewind_tictactoe::{GameEngine, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::MiddleRight, Position::TopRight] {
//!     engine.attempt_move(pos);
//! }
//! let win = engine.winner().expect("top row");
//! assert_eq!(win.player, Player::X);
//! assert_eq!(engine.display_status().to_string(), "Winner: X");
//!
//! engine.jump_to(0).unwrap();
//! engine.attempt_move(Position::BottomRight);
//! assert_eq!(engine.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod position;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Action, ActionParseError, IllegalMove, MoveOutcome};
pub use engine::{GameEngine, MoveDescription, Status};
pub use error::EngineError;
pub use position::{Direction, Position};
pub use rules::{Win, check_winner, mover_at};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
