//! Step definitions for drag-and-drop scenarios.

pub mod given;
pub mod when;
pub mod world;
