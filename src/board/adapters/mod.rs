//! Adapter implementations for board ports.

pub mod ids;
pub mod listener;

pub use ids::{RandomIdGenerator, SequentialIdGenerator};
pub use listener::{CallbackListener, RecordingListener};
