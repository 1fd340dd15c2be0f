//! Change notification port.

use crate::board::domain::{BoardChange, BoardState};
use std::fmt;
use std::sync::Arc;

/// Receives a notification after every effective board mutation.
///
/// Listeners are called synchronously on the mutating thread, after the new
/// snapshot is already visible through the store.
pub trait BoardListener: Send + Sync {
    /// Handles a change. `state` is the snapshot the change produced.
    fn on_change(&self, change: &BoardChange, state: &Arc<BoardState>);
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a handle from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the following handle.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
