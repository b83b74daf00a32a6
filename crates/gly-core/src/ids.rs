//! ID prefix constants for Galley entities.
//!
//! IDs are `<prefix>-<8 hex chars>`, generated by the database layer.

pub const PREFIX_CLIENT: &str = "cli";
pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_FILE: &str = "fil";
pub const PREFIX_COMMUNICATION: &str = "com";

/// All prefixes, for exhaustive generation tests.
pub const ALL_PREFIXES: [&str; 4] = [
    PREFIX_CLIENT,
    PREFIX_PROJECT,
    PREFIX_FILE,
    PREFIX_COMMUNICATION,
];
