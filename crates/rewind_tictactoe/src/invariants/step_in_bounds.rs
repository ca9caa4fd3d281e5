//! Pointer invariant: the current step indexes a recorded snapshot.

use super::Invariant;
use crate::GameEngine;

/// Invariant: `step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameEngine> for StepInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.step() < engine.len()
    }

    fn description() -> &'static str {
        "Current step is within recorded history"
    }
}
