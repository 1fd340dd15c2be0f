//! Drag lifecycle events delivered by the gesture layer.

use crate::board::domain::{Column, Id, Task};

/// Kind of a draggable or droppable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A task card.
    Task,
    /// A column.
    Column,
}

/// The item picked up at the start of a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    /// A task card, captured as it was when the drag began.
    Task(Task),
    /// A column.
    Column(Column),
}

impl DragItem {
    /// Returns the item kind.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Task(_) => ItemKind::Task,
            Self::Column(_) => ItemKind::Column,
        }
    }

    /// Returns the raw identifier of the item.
    #[must_use]
    pub const fn id(&self) -> &Id {
        match self {
            Self::Task(task) => task.id().as_id(),
            Self::Column(column) => column.id().as_id(),
        }
    }
}

/// Pointer hover update while an item is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOver {
    /// Identifier of the dragged item.
    pub active_id: Id,
    /// Kind of the dragged item.
    pub active_kind: ItemKind,
    /// Identifier and kind of the item under the pointer, if any.
    pub over: Option<(Id, ItemKind)>,
}

impl DragOver {
    /// Creates a hover update with a drop target.
    #[must_use]
    pub fn new(
        active_id: impl Into<Id>,
        active_kind: ItemKind,
        over_id: impl Into<Id>,
        over_kind: ItemKind,
    ) -> Self {
        Self {
            active_id: active_id.into(),
            active_kind,
            over: Some((over_id.into(), over_kind)),
        }
    }

    /// Creates a hover update with nothing under the pointer.
    #[must_use]
    pub fn over_nothing(active_id: impl Into<Id>, active_kind: ItemKind) -> Self {
        Self {
            active_id: active_id.into(),
            active_kind,
            over: None,
        }
    }

    /// Convenience constructor for a task hovering over a column.
    #[must_use]
    pub fn task_over_column(task: impl Into<Id>, column: impl Into<Id>) -> Self {
        Self::new(task, ItemKind::Task, column, ItemKind::Column)
    }

    /// Convenience constructor for a task hovering over another task.
    #[must_use]
    pub fn task_over_task(task: impl Into<Id>, other: impl Into<Id>) -> Self {
        Self::new(task, ItemKind::Task, other, ItemKind::Task)
    }
}

/// One step of the drag lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// An item was picked up.
    Start(DragItem),
    /// The pointer moved while dragging.
    Over(DragOver),
    /// The item was dropped or the drag was cancelled.
    End,
}
