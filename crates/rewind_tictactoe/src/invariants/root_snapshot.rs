//! Root snapshot invariant: history starts from an empty board.

use super::Invariant;
use crate::GameEngine;

/// Invariant: `history[0]` exists, its board is empty, and it has no last move.
pub struct RootSnapshotInvariant;

impl Invariant<GameEngine> for RootSnapshotInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .first()
            .is_some_and(|root| root.board().is_clear() && root.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no last move"
    }
}
