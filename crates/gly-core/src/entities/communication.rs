use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CommunicationType, Direction};

/// A logged touchpoint with a client, optionally tied to a project.
///
/// Communications are history: the analytics core lists them but never
/// aggregates over them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Communication {
    pub id: String,
    pub client_id: String,
    pub project_id: Option<String>,
    pub communication_type: CommunicationType,
    pub direction: Direction,
    pub subject: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}
