//! Follow-up scan configuration.

use serde::{Deserialize, Serialize};

/// Days before an uncontacted lead goes stale.
const fn default_lead_days() -> u32 {
    3
}

/// Days before an unanswered quote warrants a nudge.
const fn default_quote_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FollowUpConfig {
    #[serde(default = "default_lead_days")]
    pub lead_days: u32,

    #[serde(default = "default_quote_days")]
    pub quote_days: u32,
}

impl Default for FollowUpConfig {
    fn default() -> Self {
        Self {
            lead_days: default_lead_days(),
            quote_days: default_quote_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_studio_cadence() {
        let config = FollowUpConfig::default();
        assert_eq!(config.lead_days, 3);
        assert_eq!(config.quote_days, 7);
    }
}
