//! Caller-side validation for text entered into the board.
//!
//! The store accepts any text. [`BoardInput`] applies the rules the board UI
//! enforces before calling it: column titles and new task content are
//! trimmed and must not be empty, and a rejected column title raises a
//! notice that hides itself after a fixed interval.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use tracing::debug;

use crate::board::{
    domain::{BoardDomainError, ColumnId, ColumnTitle, TaskContent, TaskId},
    services::{BoardConfig, BoardStore},
};

/// A validation message shown to the user until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationNotice {
    error: BoardDomainError,
    raised_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl ValidationNotice {
    /// Creates a notice raised at `raised_at` that hides after `visible_for`.
    #[must_use]
    pub fn new(error: BoardDomainError, raised_at: DateTime<Utc>, visible_for: Duration) -> Self {
        let expires_at = TimeDelta::from_std(visible_for)
            .ok()
            .and_then(|delta| raised_at.checked_add_signed(delta));
        Self {
            error,
            raised_at,
            expires_at,
        }
    }

    /// Returns the validation error behind the notice.
    #[must_use]
    pub const fn error(&self) -> &BoardDomainError {
        &self.error
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Returns when the notice was raised.
    #[must_use]
    pub const fn raised_at(&self) -> DateTime<Utc> {
        self.raised_at
    }

    /// Returns whether the notice is still visible at `now`.
    ///
    /// A notice whose expiry cannot be represented never expires.
    #[must_use]
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// Validating front door for text-based board edits.
#[derive(Debug)]
pub struct BoardInput<C: Clock> {
    clock: C,
    notice_visible_for: Duration,
    notice: Option<ValidationNotice>,
}

impl<C: Clock> BoardInput<C> {
    /// Creates an input layer whose notices stay visible for
    /// `notice_visible_for`.
    #[must_use]
    pub const fn new(clock: C, notice_visible_for: Duration) -> Self {
        Self {
            clock,
            notice_visible_for,
            notice: None,
        }
    }

    /// Creates an input layer using the configured notice interval.
    #[must_use]
    pub const fn from_config(clock: C, config: &BoardConfig) -> Self {
        Self::new(clock, config.notice_dismiss_after)
    }

    /// Adds a column from raw user text.
    ///
    /// The title is trimmed before it reaches the store. On success any
    /// visible notice is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnTitle`] when the trimmed title
    /// is empty; a notice is raised and the store is left untouched.
    pub fn submit_column(
        &mut self,
        store: &mut BoardStore,
        raw_title: &str,
    ) -> Result<ColumnId, BoardDomainError> {
        match ColumnTitle::new(raw_title) {
            Ok(title) => {
                self.notice = None;
                Ok(store.add_column(title.into_inner()))
            }
            Err(err) => {
                debug!(error = %err, "column title rejected");
                self.notice = Some(ValidationNotice::new(
                    err.clone(),
                    self.clock.utc(),
                    self.notice_visible_for,
                ));
                Err(err)
            }
        }
    }

    /// Adds a task from raw user text. The content is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskContent`] when the trimmed
    /// content is empty. No notice is raised.
    pub fn submit_task(
        &self,
        store: &mut BoardStore,
        column_id: &ColumnId,
        raw_content: &str,
    ) -> Result<TaskId, BoardDomainError> {
        let content = TaskContent::new(raw_content)?;
        Ok(store.add_task(column_id.clone(), content.into_inner()))
    }

    /// Replaces a task's content with edited text.
    ///
    /// The edit is accepted when it is non-empty after trimming, and is then
    /// stored exactly as typed. Returns whether the task was found.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskContent`] when the trimmed edit
    /// is empty; the task keeps its previous content.
    pub fn submit_task_edit(
        &self,
        store: &mut BoardStore,
        task_id: &TaskId,
        raw_content: &str,
    ) -> Result<bool, BoardDomainError> {
        TaskContent::new(raw_content)?;
        Ok(store.update_task(task_id, raw_content))
    }

    /// Returns the notice visible right now, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&ValidationNotice> {
        self.notice_at(self.clock.utc())
    }

    /// Returns the notice visible at `now`, if any.
    #[must_use]
    pub fn notice_at(&self, now: DateTime<Utc>) -> Option<&ValidationNotice> {
        self.notice
            .as_ref()
            .filter(|notice| notice.is_visible_at(now))
    }

    /// Hides the current notice immediately.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
