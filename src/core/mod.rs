//! Core state machine types and logic.
//!
//! This module contains the engine and everything it is made of:
//! - State and event identifiers
//! - State and transition tables
//! - Visited-state history with an undo/redo cursor
//! - The [`Machine`] itself and its errors
//!
//! Everything here is synchronous and in-memory. A `Machine` is a plain
//! owned value; callers sharing one across threads must serialize access.

mod error;
mod history;
mod machine;
mod state;
mod table;

pub use error::MachineError;
pub use history::{History, HistoryEntry};
pub use machine::Machine;
pub use state::{EventId, StateId};
pub use table::{StateDefinition, StateTable, TransitionTable};
