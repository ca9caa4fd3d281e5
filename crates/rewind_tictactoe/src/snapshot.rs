//! Immutable board snapshots stored in the game history.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// A board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The snapshot every game starts from: empty board, no move.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Builds a snapshot from an arbitrary board and last move.
    pub fn new(board: Board, last_move: Option<Position>) -> Self {
        Self { board, last_move }
    }

    /// Returns the snapshot reached by `player` marking `pos` on this board.
    pub fn advance(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the position of the move that produced this snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}
