//! Turn order for tic-tac-toe.

use crate::Player;

/// Returns the player to move at history step `step`.
///
/// X moves on even steps and O on odd ones, so the mover is always
/// derived from the step rather than stored.
pub fn mover_at(step: usize) -> Player {
    if step % 2 == 0 { Player::X } else { Player::O }
}
