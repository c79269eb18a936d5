//! Machine configuration.
//!
//! A configuration is the declarative description a [`Machine`] is built
//! from: a table of states with their event-triggered transitions, plus
//! the state to start in. Its JSON form is:
//!
//! ```json
//! {
//!   "initial": "draft",
//!   "states": {
//!     "draft":     {"transitions": {"submit": "review"}},
//!     "review":    {"transitions": {"approve": "published", "reject": "draft"}},
//!     "published": {}
//!   }
//! }
//! ```
//!
//! Loading never validates. [`MachineConfig::validate`] is a separate,
//! optional pass that uses Stillwater's `Validation` to report every
//! problem at once instead of stopping at the first.
//!
//! [`Machine`]: crate::core::Machine

use crate::core::{StateId, StateTable};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::ConfigError;

/// States, transitions and initial state of a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,

    /// Declared states in declaration order
    pub states: StateTable,
}

impl MachineConfig {
    pub fn new(initial: impl Into<StateId>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::MachineConfig;
    ///
    /// let config = MachineConfig::from_json(
    ///     r#"{"initial": "idle", "states": {"idle": {}, "busy": {}}}"#,
    /// ).unwrap();
    /// assert_eq!(config.initial, "idle");
    /// assert_eq!(config.states.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration, accumulating ALL problems.
    ///
    /// Returns `Validation::Success(())` when the initial state and every
    /// transition target are declared.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(ConfigError::EmptyStateTable));
        }

        let initial_check = if self.states.contains(self.initial.as_str()) {
            Validation::success(())
        } else {
            Validation::fail(ConfigError::UnknownInitialState {
                state: self.initial.clone(),
            })
        };
        checks.push(initial_check);

        for (state, definition) in self.states.iter() {
            let mut rules: Vec<_> = definition.transitions.iter().collect();
            rules.sort_by(|a, b| a.0.cmp(b.0));

            for (event, target) in rules {
                if !self.states.contains(target.as_str()) {
                    checks.push(Validation::fail(ConfigError::UnknownTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
