//! Identifier types for board entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque board identifier: either an unsigned integer or a string.
///
/// Serialized untagged, so a JSON number becomes [`Id::Number`] and a JSON
/// string becomes [`Id::Text`].
///
/// # Examples
///
/// ```
/// use kanban_board::board::domain::Id;
///
/// assert_eq!(Id::from(7).to_string(), "7");
/// assert_eq!(Id::from("backlog").to_string(), "backlog");
/// assert_ne!(Id::from(7), Id::from("7"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric identifier.
    Number(u64),
    /// String identifier.
    Text(String),
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Identifier of a column.
///
/// Column and task identifiers share a representation but live in separate
/// namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(Id);

impl ColumnId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<Id>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn as_id(&self) -> &Id {
        &self.0
    }

    /// Consumes the wrapper and returns the raw identifier.
    #[must_use]
    pub fn into_inner(self) -> Id {
        self.0
    }
}

impl From<Id> for ColumnId {
    fn from(value: Id) -> Self {
        Self(value)
    }
}

impl From<u64> for ColumnId {
    fn from(value: u64) -> Self {
        Self(Id::Number(value))
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        Self(Id::from(value))
    }
}

impl AsRef<Id> for ColumnId {
    fn as_ref(&self) -> &Id {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Id);

impl TaskId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<Id>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn as_id(&self) -> &Id {
        &self.0
    }

    /// Consumes the wrapper and returns the raw identifier.
    #[must_use]
    pub fn into_inner(self) -> Id {
        self.0
    }
}

impl From<Id> for TaskId {
    fn from(value: Id) -> Self {
        Self(value)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(Id::Number(value))
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(Id::from(value))
    }
}

impl AsRef<Id> for TaskId {
    fn as_ref(&self) -> &Id {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
