//! Change events emitted after each effective board mutation.

use super::{Column, ColumnId, Task, TaskId};

/// Describes the mutation that produced a new board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardChange {
    /// A column was appended.
    ColumnAdded(Column),
    /// A column was removed together with its tasks.
    ColumnDeleted {
        /// Identifier of the removed column.
        id: ColumnId,
        /// Tasks removed by the cascade.
        removed_tasks: Vec<Task>,
    },
    /// A task was appended.
    TaskAdded(Task),
    /// A task was removed.
    TaskDeleted(Task),
    /// A task's content was replaced.
    TaskUpdated {
        /// Identifier of the updated task.
        id: TaskId,
        /// New content.
        content: String,
    },
    /// A task was reassigned to a column.
    TaskMoved {
        /// Identifier of the moved task.
        id: TaskId,
        /// Column the task was in before the move.
        from: ColumnId,
        /// Column the task is in now.
        to: ColumnId,
    },
}

impl BoardChange {
    /// Returns a short, stable name for the change kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ColumnAdded(_) => "column_added",
            Self::ColumnDeleted { .. } => "column_deleted",
            Self::TaskAdded(_) => "task_added",
            Self::TaskDeleted(_) => "task_deleted",
            Self::TaskUpdated { .. } => "task_updated",
            Self::TaskMoved { .. } => "task_moved",
        }
    }
}
