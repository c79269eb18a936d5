//! Retrace: a finite state machine with undo/redo history
//!
//! A [`Machine`] is built from a declarative table of states and the
//! event-triggered transitions between them. It tracks the active state,
//! applies transitions on demand and records every visited state in a
//! linear history that can be walked back and forth.
//!
//! # Core Concepts
//!
//! - **State table**: states in declaration order, each with an
//!   event → target transition table
//! - **Machine**: the active state plus a history with a movable cursor
//! - **History**: `undo`/`redo` walk it; `change_state`, `trigger` and
//!   `reset` extend it
//!
//! Machines are synchronous, in-memory values with no internal locking.
//!
//! # Example
//!
//! ```rust
//! use retrace::{state_table, Machine, MachineConfig, MachineError};
//!
//! let states = state_table! {
//!     "A" => { "go" => "B" },
//!     "B" => { "back" => "A" },
//! };
//! let mut machine = Machine::new(MachineConfig::new("A", states));
//!
//! machine.trigger("go").unwrap();
//! machine.trigger("back").unwrap();
//! assert_eq!(machine.state(), "A");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "B");
//!
//! assert!(matches!(
//!     machine.trigger("go"),
//!     Err(MachineError::NoTransition { .. })
//! ));
//! ```

pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use config::{ConfigError, MachineConfig};
pub use self::core::{EventId, History, Machine, MachineError, StateId, StateTable};
