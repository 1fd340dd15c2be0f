//! Drag state machine.

use tracing::{debug, trace};

use super::{DragEvent, DragItem, DragOver, ItemKind};
use crate::board::{
    domain::{ColumnId, Task, TaskId},
    services::BoardStore,
};

/// Transient drag state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No task is being dragged.
    #[default]
    Idle,
    /// A task is being dragged; holds the task as captured at drag start.
    Dragging(Task),
}

/// What a hover tick did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The tick had no drop target, targeted the dragged item itself, or did
    /// not involve a dragged task.
    Ignored,
    /// The hovered task could not be found, so no target column resolved.
    Unresolved,
    /// The dragged task does not exist on the board.
    TaskMissing(TaskId),
    /// The task was already in the target column.
    Unchanged {
        /// Dragged task.
        task: TaskId,
        /// Column the task stays in.
        column: ColumnId,
    },
    /// The task was reassigned to another column.
    Moved {
        /// Dragged task.
        task: TaskId,
        /// Column the task was in before the tick.
        from: ColumnId,
        /// Column the task is in now.
        to: ColumnId,
    },
}

/// Interprets drag lifecycle events and drives the board store.
///
/// The handler borrows the store per event rather than owning it, so the
/// same store can be shared with the rendering layer between events.
///
/// # Examples
///
/// ```
/// use kanban_board::board::services::BoardStore;
/// use kanban_board::drag::{DragInteractionHandler, DragItem, DragOver};
///
/// let mut store = BoardStore::new();
/// let todo = store.add_column("To Do");
/// let done = store.add_column("Done");
/// let task_id = store.add_task(todo, "ship it");
/// let task = store.task(&task_id).cloned().expect("task exists");
///
/// let mut drag = DragInteractionHandler::new();
/// drag.drag_start(DragItem::Task(task));
/// DragInteractionHandler::drag_over(
///     &mut store,
///     &DragOver::task_over_column(task_id.clone().into_inner(), done.clone().into_inner()),
/// );
/// drag.drag_end();
///
/// assert_eq!(store.task(&task_id).map(|t| t.column_id().clone()), Some(done));
/// assert!(drag.active_task().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DragInteractionHandler {
    phase: DragPhase,
}

impl DragInteractionHandler {
    /// Creates an idle handler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn active_task(&self) -> Option<&Task> {
        match &self.phase {
            DragPhase::Dragging(task) => Some(task),
            DragPhase::Idle => None,
        }
    }

    /// Dispatches a lifecycle event.
    pub fn handle(&mut self, store: &mut BoardStore, event: DragEvent) -> DragOutcome {
        match event {
            DragEvent::Start(item) => {
                self.drag_start(item);
                DragOutcome::Ignored
            }
            DragEvent::Over(tick) => Self::drag_over(store, &tick),
            DragEvent::End => {
                self.drag_end();
                DragOutcome::Ignored
            }
        }
    }

    /// Starts a drag. Only task drags are recorded; a column drag leaves the
    /// handler idle.
    pub fn drag_start(&mut self, item: DragItem) {
        match item {
            DragItem::Task(task) => {
                debug!(task_id = %task.id(), "task drag started");
                self.phase = DragPhase::Dragging(task);
            }
            DragItem::Column(column) => {
                trace!(column_id = %column.id(), "column drag started, nothing recorded");
            }
        }
    }

    /// Handles a hover tick.
    ///
    /// A dragged task hovering over a column is moved into that column; one
    /// hovering over another task is moved into that task's column. The move
    /// is issued on every tick, so repeated ticks over the same target are
    /// expected. Positions within a column are never changed.
    ///
    /// The tick carries everything needed to resolve the move, so no drag
    /// phase is consulted.
    pub fn drag_over(store: &mut BoardStore, tick: &DragOver) -> DragOutcome {
        let Some((over_id, over_kind)) = tick.over.as_ref() else {
            trace!(active_id = %tick.active_id, "drag over nothing");
            return DragOutcome::Ignored;
        };
        if *over_id == tick.active_id || tick.active_kind != ItemKind::Task {
            return DragOutcome::Ignored;
        }

        let target = match over_kind {
            ItemKind::Task => store
                .task(&TaskId::from(over_id.clone()))
                .map(|hovered| hovered.column_id().clone()),
            ItemKind::Column => Some(ColumnId::from(over_id.clone())),
        };
        let Some(to) = target else {
            trace!(over_id = %over_id, "hovered task not found");
            return DragOutcome::Unresolved;
        };

        let task_id = TaskId::from(tick.active_id.clone());
        let Some(from) = store.task(&task_id).map(|task| task.column_id().clone()) else {
            return DragOutcome::TaskMissing(task_id);
        };
        store.move_task(&task_id, &to);

        if from == to {
            DragOutcome::Unchanged {
                task: task_id,
                column: to,
            }
        } else {
            debug!(task_id = %task_id, from = %from, to = %to, "task dragged to column");
            DragOutcome::Moved {
                task: task_id,
                from,
                to,
            }
        }
    }

    /// Ends the drag and returns the task that was being dragged.
    ///
    /// No board mutation happens here; reassignment already took place
    /// during hover.
    pub fn drag_end(&mut self) -> Option<Task> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging(task) => {
                debug!(task_id = %task.id(), "task drag ended");
                Some(task)
            }
            DragPhase::Idle => None,
        }
    }
}
