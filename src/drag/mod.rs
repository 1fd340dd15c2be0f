//! Drag-and-drop interaction handling.
//!
//! Translates the start/over/end drag lifecycle coming from the gesture
//! layer into [`BoardStore`](crate::board::services::BoardStore) calls. Column
//! reassignment happens incrementally on every hover tick; dropping only
//! clears the transient drag state.

mod event;
mod handler;

pub use event::{DragEvent, DragItem, DragOver, ItemKind};
pub use handler::{DragInteractionHandler, DragOutcome, DragPhase};
