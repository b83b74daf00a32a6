//! Repository modules implementing queries and mutations for all Galley entities.
//!
//! Each module adds methods to `GalleyService` via `impl GalleyService` blocks.

pub mod client;
pub mod communication;
pub mod file;
pub mod follow_up;
pub mod intake;
pub mod maintenance;
pub mod project;
pub mod snapshot;
