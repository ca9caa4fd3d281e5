//! Engine error types.

use derive_more::{Display, Error};

/// Errors returned by [`GameEngine`](crate::GameEngine) operations.
///
/// Illegal moves are not errors; see [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A jump targeted a step outside the recorded history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    InvalidStep {
        /// The requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
