//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! and history storage so the engine and its invariants share them.

pub mod turn;
pub mod win;

pub use turn::mover_at;
pub use win::{LINES, Win, check_winner};
