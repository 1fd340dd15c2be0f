//! Task entity.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A unit of work with free-text content, owned by exactly one column.
///
/// The owning column is held by identifier only; the task never owns the
/// column it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    column_id: ColumnId,
    content: String,
}

impl Task {
    /// Creates a task in the given column.
    #[must_use]
    pub fn new(id: TaskId, column_id: ColumnId, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the identifier of the owning column.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Returns the task content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns a copy of this task with replaced content.
    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    /// Returns a copy of this task reassigned to another column.
    #[must_use]
    pub fn with_column(&self, column_id: ColumnId) -> Self {
        Self {
            column_id,
            ..self.clone()
        }
    }
}
