//! # gly-config
//!
//! Layered configuration loading for Galley using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GALLEY_*` prefix, `__` as separator)
//! 2. Project-level `.galley/config.toml`
//! 3. User-level `~/.config/galley/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GALLEY_FOLLOWUP__LEAD_DAYS` -> `followup.lead_days`,
//! `GALLEY_WEBHOOK__PORT` -> `webhook.port`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gly_config::GalleyConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = GalleyConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = GalleyConfig::load().expect("config");
//!
//! println!("follow up on leads after {} days", config.followup.lead_days);
//! ```

mod database;
mod error;
mod followup;
mod general;
mod webhook;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use followup::FollowUpConfig;
pub use general::GeneralConfig;
pub use webhook::WebhookConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GalleyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub followup: FollowUpConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl GalleyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`GALLEY_*` prefix)
    /// 2. `.galley/config.toml` (project-local)
    /// 3. `~/.config/galley/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source fails to parse or merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source fails to parse or merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".galley/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GALLEY_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("galley").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GalleyConfig::default();
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.database.filename, "galley.db");
        assert_eq!(config.followup.lead_days, 3);
        assert_eq!(config.webhook.port, 8787);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = GalleyConfig::figment();
        let config: GalleyConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.followup.quote_days, 7);
    }
}
