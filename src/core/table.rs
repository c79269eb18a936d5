//! State and transition tables.
//!
//! A [`StateTable`] maps each state to its [`StateDefinition`], whose
//! [`TransitionTable`] maps events to target states. The state table keeps
//! declaration order so listings come back in the order states were
//! written, including when loaded from JSON.

use super::state::{EventId, StateId};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Outgoing transitions of a single state, keyed by event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    rules: HashMap<EventId, StateId>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing any previous target for the same event.
    pub fn insert(&mut self, event: impl Into<EventId>, target: impl Into<StateId>) {
        self.rules.insert(event.into(), target.into());
    }

    /// Target reached when `event` fires, if a rule exists.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.rules.get(event)
    }

    pub fn contains(&self, event: &str) -> bool {
        self.rules.contains_key(event)
    }

    pub fn events(&self) -> impl Iterator<Item = &EventId> {
        self.rules.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EventId, &StateId)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<E: Into<EventId>, S: Into<StateId>> FromIterator<(E, S)> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = (E, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (event, target) in iter {
            table.insert(event, target);
        }
        table
    }
}

/// Everything declared about one state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    pub transitions: TransitionTable,
}

impl StateDefinition {
    pub fn new(transitions: TransitionTable) -> Self {
        Self { transitions }
    }
}

/// Insertion-ordered mapping from state to its definition.
///
/// # Example
///
/// ```rust
/// use retrace::core::{StateDefinition, StateTable};
///
/// let mut table = StateTable::new();
/// table.insert("A", StateDefinition::new([("go", "B")].into_iter().collect()));
/// table.insert("B", StateDefinition::default());
///
/// let names: Vec<&str> = table.ids().map(|s| s.as_str()).collect();
/// assert_eq!(names, ["A", "B"]);
/// assert_eq!(table.get("A").unwrap().transitions.target("go").unwrap(), "B");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateTable {
    entries: Vec<(StateId, StateDefinition)>,
    index: HashMap<StateId, usize>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state.
    ///
    /// Re-declaring an existing state replaces its definition but keeps its
    /// original position.
    pub fn insert(&mut self, state: impl Into<StateId>, definition: StateDefinition) {
        let state = state.into();
        match self.index.get(&state) {
            Some(&pos) => self.entries[pos].1 = definition,
            None => {
                self.index.insert(state.clone(), self.entries.len());
                self.entries.push((state, definition));
            }
        }
    }

    pub fn get(&self, state: &str) -> Option<&StateDefinition> {
        self.index.get(state).map(|&pos| &self.entries[pos].1)
    }

    pub(crate) fn get_mut(&mut self, state: &str) -> Option<&mut StateDefinition> {
        let pos = *self.index.get(state)?;
        Some(&mut self.entries[pos].1)
    }

    pub fn contains(&self, state: &str) -> bool {
        self.index.contains_key(state)
    }

    /// State names in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &StateId> {
        self.entries.iter().map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &StateDefinition)> {
        self.entries.iter().map(|(id, def)| (id, def))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for StateTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for StateTable {}

impl<S: Into<StateId>> FromIterator<(S, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (S, StateDefinition)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (state, definition) in iter {
            table.insert(state, definition);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (state, definition) in &self.entries {
            map.serialize_entry(state, definition)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StateTableVisitor;

        impl<'de> Visitor<'de> for StateTableVisitor {
            type Value = StateTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of state names to state definitions")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = StateTable::new();
                while let Some((state, definition)) =
                    access.next_entry::<StateId, StateDefinition>()?
                {
                    table.insert(state, definition);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(StateTableVisitor)
    }
}
