//! Entity structs for all Galley domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema generation.

mod client;
mod communication;
mod file;
mod project;

pub use client::Client;
pub use communication::Communication;
pub use file::ProjectFile;
pub use project::Project;
