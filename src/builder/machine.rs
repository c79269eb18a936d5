//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{EventId, Machine, StateDefinition, StateId, StateTable};
use stillwater::validation::Validation;

/// Builder for constructing machines with a fluent API.
///
/// Unlike [`Machine::new`], building checks the configuration and refuses
/// initial states or transition targets that were never declared.
#[derive(Debug, Default)]
pub struct MachineBuilder {
    initial: Option<StateId>,
    states: StateTable,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring it again keeps its transitions.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        let state = state.into();
        if !self.states.contains(state.as_str()) {
            self.states.insert(state, StateDefinition::default());
        }
        self
    }

    /// Declare several states at once.
    pub fn states<I, S>(self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        states.into_iter().fold(self, |builder, state| builder.state(state))
    }

    /// Add a rule: `event` moves `from` to `to`.
    ///
    /// `from` is declared if it was not yet. A second rule for the same
    /// event on the same state replaces the first.
    pub fn transition(
        self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        let from = from.into();
        let mut builder = self.state(from.clone());
        if let Some(definition) = builder.states.get_mut(from.as_str()) {
            definition.transitions.insert(event, to);
        }
        builder
    }

    /// Build and validate the configuration without creating a machine.
    pub fn build_config(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let config = MachineConfig::new(initial, self.states);
        match config.validate() {
            Validation::Success(_) => Ok(config),
            Validation::Failure(errors) => Err(BuildError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or the
    /// configuration references undeclared states.
    pub fn build(self) -> Result<Machine, BuildError> {
        self.build_config().map(Machine::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::new().state("A").build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = MachineBuilder::new().initial("A").build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .initial("green")
            .transition("green", "timer", "yellow")
            .transition("yellow", "timer", "red")
            .transition("red", "timer", "green")
            .build()
            .unwrap();

        assert_eq!(machine.state(), "green");
        let names: Vec<&str> = machine.states(None).into_iter().map(StateId::as_str).collect();
        assert_eq!(names, ["green", "yellow", "red"]);
    }

    #[test]
    fn explicit_states_fix_declaration_order() {
        let config = MachineBuilder::new()
            .initial("b")
            .states(["c", "b", "a"])
            .transition("a", "next", "b")
            .transition("b", "next", "c")
            .build_config()
            .unwrap();

        let names: Vec<&str> = config.states.ids().map(StateId::as_str).collect();
        assert_eq!(names, ["c", "b", "a"]);
        assert!(config.states.get("c").unwrap().transitions.is_empty());
    }

    #[test]
    fn redeclaring_state_keeps_transitions() {
        let config = MachineBuilder::new()
            .initial("A")
            .transition("A", "go", "A")
            .state("A")
            .build_config()
            .unwrap();

        assert!(config.states.get("A").unwrap().transitions.contains("go"));
    }

    #[test]
    fn later_rule_replaces_earlier() {
        let machine = MachineBuilder::new()
            .initial("A")
            .states(["A", "B", "C"])
            .transition("A", "go", "B")
            .transition("A", "go", "C")
            .build();

        let mut machine = machine.unwrap();
        machine.trigger("go").unwrap();
        assert_eq!(machine.state(), "C");
    }

    #[test]
    fn builder_reports_every_undeclared_reference() {
        let result = MachineBuilder::new()
            .initial("start")
            .transition("A", "go", "B")
            .transition("A", "jump", "Z")
            .build();

        match result {
            Err(BuildError::InvalidConfig(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::UnknownInitialState { .. })));
                assert_eq!(
                    errors
                        .iter()
                        .filter(|e| matches!(e, ConfigError::UnknownTarget { .. }))
                        .count(),
                    2
                );
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_message_lists_problems() {
        let err = MachineBuilder::new()
            .initial("ghost")
            .state("A")
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid machine configuration (1 problem(s)): Initial state 'ghost' is not declared"
        );
    }
}
