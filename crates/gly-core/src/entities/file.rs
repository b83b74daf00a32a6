use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FileType;

/// Metadata for a file attached to a project.
///
/// Only metadata is tracked; the bytes live wherever `path` points
/// (storage itself is out of scope).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectFile {
    pub id: String,
    pub project_id: String,
    pub file_type: FileType,
    pub filename: String,
    pub path: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}
