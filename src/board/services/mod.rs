//! Application services for the board: the state container, caller-side
//! input validation, and configuration.

mod config;
mod input;
mod store;

pub use config::{BoardConfig, BoardConfigError, DEFAULT_NOTICE_DISMISS_AFTER, IdStrategy};
pub use input::{BoardInput, ValidationNotice};
pub use store::BoardStore;
