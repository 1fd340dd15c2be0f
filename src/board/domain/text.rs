//! Validated text values accepted from user input.
//!
//! The board store itself accepts any string; these types carry the
//! non-empty-after-trim rule applied before text reaches the store.

use super::BoardDomainError;
use std::fmt;

/// Column title that is non-empty after trimming.
///
/// # Examples
///
/// ```
/// use kanban_board::board::domain::{BoardDomainError, ColumnTitle};
///
/// let title = ColumnTitle::new("  Backlog ").expect("valid title");
/// assert_eq!(title.as_str(), "Backlog");
/// assert_eq!(ColumnTitle::new("   "), Err(BoardDomainError::EmptyColumnTitle));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTitle(String);

impl ColumnTitle {
    /// Trims and validates a raw title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnTitle`] when nothing remains
    /// after trimming.
    pub fn new(raw: &str) -> Result<Self, BoardDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyColumnTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the trimmed title.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ColumnTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task content that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent(String);

impl TaskContent {
    /// Trims and validates raw content.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskContent`] when nothing remains
    /// after trimming.
    pub fn new(raw: &str) -> Result<Self, BoardDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskContent);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the trimmed content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the trimmed content.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
