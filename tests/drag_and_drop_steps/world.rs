//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use kanban_board::{
    board::{
        adapters::RecordingListener,
        domain::{ColumnId, Id, TaskId},
        services::{BoardConfig, BoardStore},
    },
    drag::{DragInteractionHandler, DragItem, DragOver},
};
use rstest::fixture;

/// Scenario world for drag-and-drop behaviour tests.
pub struct DragWorld {
    pub store: BoardStore,
    pub drag: DragInteractionHandler,
    pub recorder: Arc<RecordingListener>,
}

impl DragWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_columns(Vec::new())
    }

    /// Replaces the board with one seeded with `titles`.
    #[must_use]
    pub fn with_columns(titles: Vec<String>) -> Self {
        let config = BoardConfig {
            seed_columns: titles,
            ..BoardConfig::empty()
        };
        let mut store = BoardStore::from_config(&config);
        let recorder = Arc::new(RecordingListener::new());
        store.subscribe(recorder.clone());
        Self {
            store,
            drag: DragInteractionHandler::new(),
            recorder,
        }
    }

    /// Finds a column by title.
    pub fn column_id(&self, title: &str) -> Result<ColumnId, eyre::Report> {
        self.store
            .columns()
            .iter()
            .find(|column| column.title() == title)
            .map(|column| column.id().clone())
            .ok_or_else(|| eyre::eyre!("no column titled {title}"))
    }

    /// Finds a task by content.
    pub fn task_id(&self, content: &str) -> Result<TaskId, eyre::Report> {
        self.store
            .tasks()
            .iter()
            .find(|task| task.content() == content)
            .map(|task| task.id().clone())
            .ok_or_else(|| eyre::eyre!("no task with content {content}"))
    }

    /// Starts dragging the task with `content` unless it is already active.
    pub fn ensure_dragging(&mut self, content: &str) -> Result<TaskId, eyre::Report> {
        let id = self.task_id(content)?;
        let already_active = self
            .drag
            .active_task()
            .is_some_and(|task| task.id() == &id);
        if !already_active {
            let task = self
                .store
                .task(&id)
                .cloned()
                .ok_or_else(|| eyre::eyre!("task {id} vanished"))?;
            self.drag.drag_start(DragItem::Task(task));
        }
        Ok(id)
    }

    /// Sends one hover tick for `task` over `target`.
    pub fn hover(&mut self, task: &TaskId, target: Id, over_task: bool) {
        let active = task.clone().into_inner();
        let tick = if over_task {
            DragOver::task_over_task(active, target)
        } else {
            DragOver::task_over_column(active, target)
        };
        DragInteractionHandler::drag_over(&mut self.store, &tick);
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}
