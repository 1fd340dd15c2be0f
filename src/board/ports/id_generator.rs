//! Identifier generation port.

use crate::board::domain::Id;

/// Source of fresh entity identifiers.
///
/// Implementations should not repeat identifiers. The store still checks
/// each drawn identifier against the live set of its entity class and draws
/// again on a collision.
pub trait IdGenerator: Send + Sync {
    /// Returns the next identifier.
    fn next_id(&self) -> Id;
}
