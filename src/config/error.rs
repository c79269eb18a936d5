//! Configuration error types.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Problems found while loading or checking a machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The source text is not a valid configuration document
    #[error("Failed to parse machine configuration: {0}")]
    Parse(String),

    /// No states are declared
    #[error("State table is empty")]
    EmptyStateTable,

    /// The initial state is not declared
    #[error("Initial state '{state}' is not declared")]
    UnknownInitialState { state: StateId },

    /// A transition leads to a state that is not declared
    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
