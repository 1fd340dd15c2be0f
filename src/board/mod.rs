//! Board state management.
//!
//! The board is a single in-memory container of ordered columns and tasks.
//! Every mutation swaps in a new immutable snapshot and notifies
//! subscribers. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store and input services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
