//! Rewind - tic-tac-toe with move history and time travel.
//!
//! This crate is the presentation layer around [`rewind_tictactoe`]:
//!
//! - **TUI**: ratatui front end that renders the board and move list and
//!   forwards key presses to the engine
//! - **View**: serializable capture of the engine's queries, used by the
//!   scripted `play` command
//! - **Config**: TOML settings for logging and the initial display order
//!
//! # Example
//!
//! ```
//! use rewind::{play, Action};
//!
//! let actions: Vec<Action> = ["0", "4", "1", "5", "2"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let view = play(&actions, true).unwrap();
//! assert_eq!(view.status, "Winner: X");
//! assert_eq!(view.winning_line, Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Terminal UI
pub use tui::{App, Flow, Focus, run_tui};

// Crate-level exports - Read model
pub use view::{GameView, MoveRow, play};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    Action, Board, EngineError, GameEngine, MoveDescription, MoveOutcome, Player, Position,
    Snapshot, Square, Status, Win,
};
