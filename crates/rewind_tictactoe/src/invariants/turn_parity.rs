//! Turn parity invariant: each snapshot matches the alternating turn order.

use super::Invariant;
use crate::rules::mover_at;
use crate::{GameEngine, Player};

/// Invariant: snapshot `n` has exactly `n` marks, X holds `ceil(n / 2)` of
/// them, and its last move carries the mark of `mover_at(n - 1)`.
pub struct TurnParityInvariant;

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().iter().enumerate().all(|(step, snapshot)| {
            let board = snapshot.board();
            let x_count = board.occupied().filter(|(_, p)| *p == Player::X).count();
            let counts_match = board.occupied_count() == step && x_count == step.div_ceil(2);

            let last_move_matches = match (step, snapshot.last_move()) {
                (0, None) => true,
                (0, Some(_)) | (_, None) => false,
                (step, Some(pos)) => board.get(pos).player() == Some(mover_at(step - 1)),
            };

            counts_match && last_move_matches
        })
    }

    fn description() -> &'static str {
        "Mark counts and last moves follow alternating turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{EngineInvariants, InvariantSet};
    use crate::Position;

    #[test]
    fn test_holds_through_a_full_game() {
        let mut engine = GameEngine::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::TopCenter,
            Position::BottomCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomRight,
            Position::BottomLeft,
        ] {
            engine.attempt_move(pos);
            assert!(TurnParityInvariant::holds(&engine));
        }
        assert_eq!(engine.len(), 10);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_holds_after_jumps() {
        let mut engine = GameEngine::new();
        engine.attempt_move(Position::Center);
        engine.attempt_move(Position::TopLeft);
        engine.jump_to(1).unwrap();
        assert!(TurnParityInvariant::holds(&engine));
        engine.attempt_move(Position::BottomRight);
        assert!(TurnParityInvariant::holds(&engine));
    }
}
