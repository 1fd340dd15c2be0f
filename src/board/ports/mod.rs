//! Port contracts for the board store.
//!
//! Ports define the seams the store depends on: where fresh identifiers
//! come from and who is told about state changes.

pub mod id_generator;
pub mod listener;

pub use id_generator::IdGenerator;
pub use listener::{BoardListener, SubscriptionId};
