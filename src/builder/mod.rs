//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a table macro for writing
//! machine configurations in code. Unlike loading a configuration, the
//! builder checks what it produces and reports every problem at once.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
