//! Kanban board core: an in-memory board state container and the drag
//! interaction logic that reassigns tasks between columns.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Immutable board snapshots and pure transitions
//! - **Ports**: Trait seams for identifier generation and change listeners
//! - **Adapters**: Concrete generators and listeners
//! - **Services**: The single-writer [`board::services::BoardStore`] and the
//!   caller-side input validation layer
//!
//! # Modules
//!
//! - [`board`]: Columns, tasks, and the board state container
//! - [`drag`]: Drag lifecycle handling that drives task column reassignment

pub mod board;
pub mod drag;
