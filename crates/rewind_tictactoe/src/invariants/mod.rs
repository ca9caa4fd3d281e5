//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. The engine checks them in debug builds; tests check them
//! directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod root_snapshot;
pub mod step_in_bounds;
pub mod turn_parity;

pub use root_snapshot::RootSnapshotInvariant;
pub use step_in_bounds::StepInBoundsInvariant;
pub use turn_parity::TurnParityInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    RootSnapshotInvariant,
    StepInBoundsInvariant,
    TurnParityInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine, Player, Position, Snapshot, Square};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = GameEngine::new();
        engine.attempt_move(Position::Center);

        // O's mark where X just moved, and a pointer past the end.
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        engine.history[1] = Snapshot::new(board, Some(Position::Center));
        engine.step = 5;

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].to_string(),
            StepInBoundsInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Structural = (RootSnapshotInvariant, StepInBoundsInvariant);
        assert!(Structural::check_all(&GameEngine::new()).is_ok());
    }
}
