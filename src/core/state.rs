//! State and event identifiers.
//!
//! Both are opaque string names. They are compared by value and borrow as
//! `str`, so tables keyed by them can be queried with plain string slices.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a state in a [`StateTable`](super::StateTable).
///
/// # Example
///
/// ```rust
/// use retrace::core::StateId;
///
/// let idle = StateId::new("idle");
/// assert_eq!(idle.as_str(), "idle");
/// assert_eq!(idle, StateId::from("idle"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of an event that may fire a transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_id_conversions {
    ($id:ty) => {
        impl From<&str> for $id {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $id {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $id {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $id {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $id {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $id {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_id_conversions!(StateId);
impl_id_conversions!(EventId);
