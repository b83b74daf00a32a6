//! Webhook listener configuration.

use serde::{Deserialize, Serialize};

const fn default_port() -> u16 {
    8787
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    /// Port the contact-form listener binds on 127.0.0.1.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}
