//! The finite state machine engine.

use super::error::MachineError;
use super::history::History;
use super::state::{EventId, StateId};
use super::table::{StateTable, TransitionTable};
use crate::config::{ConfigError, MachineConfig};
use tracing::debug;

/// A state machine with a linear undo/redo history.
///
/// The state table is fixed at construction. Every direct assignment,
/// triggered transition and reset is recorded in [`History`], which
/// [`undo`](Machine::undo) and [`redo`](Machine::redo) walk through.
///
/// # Example
///
/// ```rust
/// use retrace::{Machine, MachineConfig};
///
/// let config = MachineConfig::from_json(r#"{
///     "initial": "A",
///     "states": {
///         "A": {"transitions": {"go": "B"}},
///         "B": {"transitions": {"back": "A"}}
///     }
/// }"#).unwrap();
///
/// let mut machine = Machine::new(config);
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "B");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "A");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    states: StateTable,
    initial: StateId,
    current: StateId,
    history: History,
}

impl Machine {
    /// Create a machine in its initial state.
    ///
    /// The configuration is taken as given. An initial state missing from
    /// the table is accepted; every [`trigger`](Machine::trigger) then fails
    /// until the machine is moved to a declared state.
    pub fn new(config: MachineConfig) -> Self {
        let MachineConfig { initial, states } = config;
        Self {
            current: initial.clone(),
            history: History::new(initial.clone()),
            states,
            initial,
        }
    }

    /// Parse a JSON configuration and create a machine from it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(MachineConfig::from_json(json)?))
    }

    /// Active state.
    pub fn state(&self) -> &StateId {
        &self.current
    }

    pub fn initial_state(&self) -> &StateId {
        &self.initial
    }

    pub fn state_table(&self) -> &StateTable {
        &self.states
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// 1-based position of the history cursor.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Move directly to `target`.
    ///
    /// Always records a new history entry, even when `target` is already
    /// the newest one, and discards any pending redo.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.states.contains(target) {
            debug!(from = %self.current, to = target, "rejected change to undeclared state");
            return Err(MachineError::InvalidState {
                state: StateId::from(target),
            });
        }

        let target = StateId::from(target);
        debug!(from = %self.current, to = %target, "changing state");
        self.current = target.clone();
        self.history.push(target);
        self.history.seek_end();
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Unlike [`change_state`](Machine::change_state), the target is only
    /// recorded if it differs from the newest history entry. The cursor
    /// moves to the end of history either way.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .states
            .get(self.current.as_str())
            .and_then(|definition| definition.transitions.target(event))
            .cloned();

        let Some(target) = target else {
            debug!(state = %self.current, event, "no transition for event");
            return Err(MachineError::NoTransition {
                state: self.current.clone(),
                event: EventId::from(event),
            });
        };

        debug!(from = %self.current, to = %target, event, "transition");
        self.current = target.clone();
        self.history.push_if_changed(target);
        self.history.seek_end();
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// The initial state is appended to history but the cursor stays put,
    /// so one redo onto that same entry becomes available.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.initial, "reset");
        self.current = self.initial.clone();
        self.history.push(self.initial.clone());
    }

    /// Declared states, in declaration order.
    ///
    /// With an `event`, only states that have a transition for it.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        match event {
            None => self.states.ids().collect(),
            Some(event) => self
                .states
                .iter()
                .filter(|(_, definition)| definition.transitions.contains(event))
                .map(|(id, _)| id)
                .collect(),
        }
    }

    /// Outgoing transitions of `state`, if it is declared.
    pub fn transitions_from(&self, state: &str) -> Option<&TransitionTable> {
        self.states.get(state).map(|definition| &definition.transitions)
    }

    /// Events that [`trigger`](Machine::trigger) accepts right now.
    pub fn available_events(&self) -> Vec<&EventId> {
        self.transitions_from(self.current.as_str())
            .map(|transitions| transitions.events().collect())
            .unwrap_or_default()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Step back to the previous history entry.
    ///
    /// Returns `false` without changing anything when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back().cloned() else {
            return false;
        };
        debug!(from = %self.current, to = %previous, cursor = self.history.cursor(), "undo");
        self.current = previous;
        true
    }

    /// Step forward to the next history entry.
    ///
    /// Returns `false` without changing anything when already at the newest.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward().cloned() else {
            return false;
        };
        debug!(from = %self.current, to = %next, cursor = self.history.cursor(), "redo");
        self.current = next;
        true
    }

    /// Drop all history, leaving only the initial state recorded.
    ///
    /// The current state is not touched and may no longer appear in history.
    pub fn clear_history(&mut self) {
        debug!(state = %self.current, dropped = self.history.len(), "clearing history");
        self.history.clear(self.initial.clone());
    }
}
