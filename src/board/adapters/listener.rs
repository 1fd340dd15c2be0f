//! Listener adapters.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::board::{
    domain::{BoardChange, BoardState},
    ports::BoardListener,
};

/// Listener that keeps every change it receives, for inspection.
#[derive(Debug, Default)]
pub struct RecordingListener {
    changes: Mutex<Vec<BoardChange>>,
    last_state: Mutex<Option<Arc<BoardState>>>,
}

impl RecordingListener {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded changes in arrival order.
    #[must_use]
    pub fn changes(&self) -> Vec<BoardChange> {
        self.changes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the snapshot delivered with the most recent change.
    #[must_use]
    pub fn last_state(&self) -> Option<Arc<BoardState>> {
        self.last_state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl BoardListener for RecordingListener {
    fn on_change(&self, change: &BoardChange, state: &Arc<BoardState>) {
        self.changes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change.clone());
        *self
            .last_state
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(state));
    }
}

/// Adapts a closure into a [`BoardListener`].
pub struct CallbackListener<F> {
    callback: F,
}

impl<F> CallbackListener<F>
where
    F: Fn(&BoardChange, &Arc<BoardState>) + Send + Sync,
{
    /// Wraps `callback`.
    #[must_use]
    pub const fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> fmt::Debug for CallbackListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackListener").finish_non_exhaustive()
    }
}

impl<F> BoardListener for CallbackListener<F>
where
    F: Fn(&BoardChange, &Arc<BoardState>) + Send + Sync,
{
    fn on_change(&self, change: &BoardChange, state: &Arc<BoardState>) {
        (self.callback)(change, state);
    }
}
