//! Errors raised by machine operations.

use super::state::{EventId, StateId};
use thiserror::Error;

/// Misuse of a machine's declared contract.
///
/// A failed operation leaves the machine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("State '{state}' is not declared in the state table")]
    InvalidState { state: StateId },

    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition { state: StateId, event: EventId },
}
