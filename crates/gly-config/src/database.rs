//! Database location configuration.

use serde::{Deserialize, Serialize};

fn default_filename() -> String {
    String::from("galley.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database filename inside the `.galley` directory.
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filename_is_galley_db() {
        assert_eq!(DatabaseConfig::default().filename, "galley.db");
    }
}
