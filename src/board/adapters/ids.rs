//! Identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::board::{domain::Id, ports::IdGenerator};

/// Strictly monotonic numeric identifiers.
///
/// One counter serves every entity class, so a column and a task never share
/// a numeric identifier either.
///
/// # Examples
///
/// ```
/// use kanban_board::board::adapters::SequentialIdGenerator;
/// use kanban_board::board::domain::Id;
/// use kanban_board::board::ports::IdGenerator;
///
/// let ids = SequentialIdGenerator::new();
/// assert_eq!(ids.next_id(), Id::Number(1));
/// assert_eq!(ids.next_id(), Id::Number(2));
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first identifier is `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the identifier the next call will produce.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Id {
        // Saturates at u64::MAX; the store rejects the repeat.
        let value = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(current.saturating_add(1))
            })
            .unwrap_or_else(|current| current);
        Id::Number(value)
    }
}

/// Random UUID v4 identifiers rendered as strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    /// Creates a random identifier generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Id {
        Id::Text(Uuid::new_v4().to_string())
    }
}
