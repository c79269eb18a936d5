//! Build errors for the machine builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state or transition")]
    NoStates,

    #[error("Invalid machine configuration ({} problem(s)): {}", .0.len(), join(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
