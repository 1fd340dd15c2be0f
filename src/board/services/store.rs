//! The board state container.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::board::{
    adapters::{RandomIdGenerator, SequentialIdGenerator},
    domain::{BoardChange, BoardState, Column, ColumnId, Id, Task, TaskId},
    ports::{BoardListener, IdGenerator, SubscriptionId},
    services::BoardConfig,
};

/// Collisions tolerated from the configured generator before switching to
/// random identifiers.
const MAX_GENERATOR_COLLISIONS: usize = 16;

/// Single owner of the canonical board state.
///
/// Mutations take `&mut self`, swap in a fresh [`Arc<BoardState>`] and then
/// notify subscribers. Snapshots already handed out never change, so a reader
/// can detect a new state with [`Arc::ptr_eq`]. Mutations that match nothing
/// leave the snapshot in place and notify nobody.
///
/// # Examples
///
/// ```
/// use kanban_board::board::services::BoardStore;
///
/// let mut store = BoardStore::new();
/// let todo = store.add_column("To Do");
/// let done = store.add_column("Done");
/// let task = store.add_task(todo.clone(), "write docs");
///
/// assert!(store.move_task(&task, &done));
/// assert_eq!(store.tasks_in(&done).count(), 1);
/// assert_eq!(store.tasks_in(&todo).count(), 0);
/// ```
pub struct BoardStore {
    state: Arc<BoardState>,
    ids: Box<dyn IdGenerator>,
    listeners: Vec<(SubscriptionId, Arc<dyn BoardListener>)>,
    next_subscription: SubscriptionId,
    snapshots: watch::Sender<Arc<BoardState>>,
}

impl BoardStore {
    /// Creates an empty board with sequential identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIdGenerator::new())
    }

    /// Creates an empty board drawing identifiers from `ids`.
    #[must_use]
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self::from_parts(BoardState::empty(), Box::new(ids))
    }

    /// Creates a board starting from an existing snapshot.
    ///
    /// Generated identifiers that clash with ones already in `state` are
    /// skipped.
    #[must_use]
    pub fn from_state(state: BoardState, ids: impl IdGenerator + 'static) -> Self {
        Self::from_parts(state, Box::new(ids))
    }

    /// Creates a board seeded from configuration.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut store = Self::from_parts(BoardState::empty(), config.id_strategy.generator());
        for title in &config.seed_columns {
            store.add_column(title.as_str());
        }
        store
    }

    fn from_parts(state: BoardState, ids: Box<dyn IdGenerator>) -> Self {
        let shared = Arc::new(state);
        let (snapshots, _) = watch::channel(Arc::clone(&shared));
        Self {
            state: shared,
            ids,
            listeners: Vec::new(),
            next_subscription: SubscriptionId::new(1),
            snapshots,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<BoardState> {
        Arc::clone(&self.state)
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.state.columns()
    }

    /// Returns all tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    /// Returns the tasks owned by `column_id`, in display order.
    pub fn tasks_in<'a>(&'a self, column_id: &ColumnId) -> impl Iterator<Item = &'a Task> + use<'a> {
        self.state.tasks_in(column_id)
    }

    /// Looks up a column.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.state.column(id)
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.state.task(id)
    }

    // ── Subscriptions ────────────────────────────────────────────────

    /// Registers a listener called after every effective mutation.
    pub fn subscribe(&mut self, listener: Arc<dyn BoardListener>) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription = id.next();
        self.listeners.push((id, listener));
        debug!(subscription = %id, "board listener subscribed");
        id
    }

    /// Removes a listener. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _)| *candidate != id);
        before != self.listeners.len()
    }

    /// Returns a channel receiver that always holds the latest snapshot.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Arc<BoardState>> {
        self.snapshots.subscribe()
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Appends a column with a fresh identifier.
    ///
    /// The title is stored as given; an empty title is accepted.
    pub fn add_column(&mut self, title: impl Into<String>) -> ColumnId {
        let id = ColumnId::from(self.fresh_id(|candidate| {
            self.state.has_column(&ColumnId::from(candidate.clone()))
        }));
        let column = Column::new(id.clone(), title);
        debug!(column_id = %id, title = column.title(), "column added");
        let next = self.state.with_column(column.clone());
        self.commit(next, BoardChange::ColumnAdded(column));
        id
    }

    /// Appends a task to `column_id` with a fresh identifier.
    ///
    /// The column is not required to exist.
    pub fn add_task(&mut self, column_id: ColumnId, content: impl Into<String>) -> TaskId {
        if !self.state.has_column(&column_id) {
            warn!(column_id = %column_id, "task added to a column that does not exist");
        }
        let id = TaskId::from(self.fresh_id(|candidate| {
            self.state.has_task(&TaskId::from(candidate.clone()))
        }));
        let task = Task::new(id.clone(), column_id, content);
        debug!(task_id = %id, column_id = %task.column_id(), "task added");
        let next = self.state.with_task(task.clone());
        self.commit(next, BoardChange::TaskAdded(task));
        id
    }

    /// Removes a task. Returns `false` when no task matched.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let Some((next, removed)) = self.state.without_task(id) else {
            return false;
        };
        debug!(task_id = %id, "task deleted");
        self.commit(next, BoardChange::TaskDeleted(removed));
        true
    }

    /// Removes a column and all of its tasks as one transition.
    ///
    /// Returns `false` when neither the column nor any task referencing it
    /// existed.
    pub fn delete_column(&mut self, id: &ColumnId) -> bool {
        let Some(removal) = self.state.without_column(id) else {
            return false;
        };
        debug!(
            column_id = %id,
            column_removed = removal.column_removed,
            removed_tasks = removal.removed_tasks.len(),
            "column deleted"
        );
        self.commit(
            removal.state,
            BoardChange::ColumnDeleted {
                id: id.clone(),
                removed_tasks: removal.removed_tasks,
            },
        );
        true
    }

    /// Replaces a task's content verbatim. Returns `false` when no task
    /// matched.
    ///
    /// Content identical to the current text succeeds without producing a
    /// new snapshot.
    pub fn update_task(&mut self, id: &TaskId, content: impl Into<String>) -> bool {
        let text: String = content.into();
        let Some(current) = self.state.task(id) else {
            return false;
        };
        if current.content() == text {
            return true;
        }
        let Some(next) = self.state.with_task_content(id, &text) else {
            return false;
        };
        debug!(task_id = %id, "task updated");
        self.commit(
            next,
            BoardChange::TaskUpdated {
                id: id.clone(),
                content: text,
            },
        );
        true
    }

    /// Reassigns a task to `to`, keeping its position in the task sequence.
    ///
    /// Returns `false` when no task matched. Moving a task to the column it
    /// is already in succeeds without producing a new snapshot. The target
    /// column is not required to exist.
    pub fn move_task(&mut self, id: &TaskId, to: &ColumnId) -> bool {
        let Some(current) = self.state.task(id) else {
            return false;
        };
        if current.column_id() == to {
            return true;
        }
        if !self.state.has_column(to) {
            warn!(task_id = %id, column_id = %to, "task moved to a column that does not exist");
        }
        let Some((next, from)) = self.state.with_task_column(id, to) else {
            return false;
        };
        debug!(task_id = %id, from = %from, to = %to, "task moved");
        self.commit(
            next,
            BoardChange::TaskMoved {
                id: id.clone(),
                from,
                to: to.clone(),
            },
        );
        true
    }

    fn fresh_id(&self, is_live: impl Fn(&Id) -> bool) -> Id {
        for _ in 0..MAX_GENERATOR_COLLISIONS {
            let candidate = self.ids.next_id();
            if !is_live(&candidate) {
                return candidate;
            }
            warn!(id = %candidate, "generated identifier already in use, drawing again");
        }
        let fallback = RandomIdGenerator::new();
        loop {
            let candidate = fallback.next_id();
            if !is_live(&candidate) {
                return candidate;
            }
        }
    }

    fn commit(&mut self, next: BoardState, change: BoardChange) {
        self.state = Arc::new(next);
        self.snapshots.send_replace(Arc::clone(&self.state));
        for (_, listener) in &self.listeners {
            listener.on_change(&change, &self.state);
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
