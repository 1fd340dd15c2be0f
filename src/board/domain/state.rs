//! Immutable board snapshots and their pure transitions.
//!
//! Every transition returns a fresh [`BoardState`] and leaves the receiver
//! untouched, so a snapshot handed to a reader never changes underneath it.
//! Transitions that would not change anything return `None`.

use super::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Ordered columns and tasks making up a board at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

/// Result of removing a column together with its tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRemoval {
    /// Board after the cascade.
    pub state: BoardState,
    /// Whether the column itself was present.
    pub column_removed: bool,
    /// Tasks removed by the cascade, in their original order.
    pub removed_tasks: Vec<Task>,
}

impl BoardState {
    /// Creates an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns all tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks owned by `column_id`, in display order.
    pub fn tasks_in<'a>(&'a self, column_id: &ColumnId) -> impl Iterator<Item = &'a Task> + use<'a> {
        let owner = column_id.clone();
        self.tasks
            .iter()
            .filter(move |task| *task.column_id() == owner)
    }

    /// Looks up a column by identifier.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns whether a column with `id` exists.
    #[must_use]
    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// Returns whether a task with `id` exists.
    #[must_use]
    pub fn has_task(&self, id: &TaskId) -> bool {
        self.task(id).is_some()
    }

    /// Returns tasks whose owning column does not exist.
    pub fn orphaned_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(|task| !self.has_column(task.column_id()))
    }

    /// Appends a column.
    #[must_use]
    pub fn with_column(&self, column: Column) -> Self {
        let mut columns = self.columns.clone();
        columns.push(column);
        Self {
            columns,
            tasks: self.tasks.clone(),
        }
    }

    /// Appends a task.
    #[must_use]
    pub fn with_task(&self, task: Task) -> Self {
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Self {
            columns: self.columns.clone(),
            tasks,
        }
    }

    /// Removes a task, returning the new board and the removed task.
    #[must_use]
    pub fn without_task(&self, id: &TaskId) -> Option<(Self, Task)> {
        let removed = self.task(id)?.clone();
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Some((
            Self {
                columns: self.columns.clone(),
                tasks,
            },
            removed,
        ))
    }

    /// Removes a column and every task that references it in one step.
    ///
    /// Tasks are matched strictly on `column_id`, so tasks pointing at `id`
    /// are removed even when no such column exists.
    #[must_use]
    pub fn without_column(&self, id: &ColumnId) -> Option<ColumnRemoval> {
        let column_removed = self.has_column(id);
        let (removed_tasks, tasks): (Vec<Task>, Vec<Task>) = self
            .tasks
            .iter()
            .cloned()
            .partition(|task| task.column_id() == id);

        if !column_removed && removed_tasks.is_empty() {
            return None;
        }

        let columns = self
            .columns
            .iter()
            .filter(|column| column.id() != id)
            .cloned()
            .collect();
        Some(ColumnRemoval {
            state: Self { columns, tasks },
            column_removed,
            removed_tasks,
        })
    }

    /// Replaces the content of a task in place.
    #[must_use]
    pub fn with_task_content(&self, id: &TaskId, content: &str) -> Option<Self> {
        self.map_task(id, |task| task.with_content(content))
    }

    /// Reassigns a task to another column without changing its position.
    ///
    /// Returns the new board and the column the task was previously in.
    #[must_use]
    pub fn with_task_column(&self, id: &TaskId, to: &ColumnId) -> Option<(Self, ColumnId)> {
        let from = self.task(id)?.column_id().clone();
        let state = self.map_task(id, |task| task.with_column(to.clone()))?;
        Some((state, from))
    }

    fn map_task(&self, id: &TaskId, f: impl Fn(&Task) -> Task) -> Option<Self> {
        if !self.has_task(id) {
            return None;
        }
        let tasks = self
            .tasks
            .iter()
            .map(|task| if task.id() == id { f(task) } else { task.clone() })
            .collect();
        Some(Self {
            columns: self.columns.clone(),
            tasks,
        })
    }
}
