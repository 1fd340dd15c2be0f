//! Error types for board input validation.

use thiserror::Error;

/// Errors returned while validating user-supplied board text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyColumnTitle,

    /// The task content is empty after trimming.
    #[error("task content must not be empty")]
    EmptyTaskContent,
}
