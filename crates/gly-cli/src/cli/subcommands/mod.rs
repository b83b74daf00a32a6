mod client;
mod communication;
mod project;
mod report;

pub use client::ClientCommands;
pub use communication::CommCommands;
pub use project::ProjectCommands;
pub use report::ReportCommands;
