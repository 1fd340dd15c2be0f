//! Domain model for the kanban board.
//!
//! Columns and tasks are plain values; [`BoardState`] snapshots are
//! immutable and every transition yields a new snapshot. Nothing in this
//! module performs I/O or holds shared state.

mod change;
mod column;
mod error;
mod ids;
mod state;
mod task;
mod text;

pub use change::BoardChange;
pub use column::Column;
pub use error::BoardDomainError;
pub use ids::{ColumnId, Id, TaskId};
pub use state::{BoardState, ColumnRemoval};
pub use task::Task;
pub use text::{ColumnTitle, TaskContent};
