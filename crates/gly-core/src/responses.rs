//! Payload and response types shared by the `gly` CLI and the webhook.
//!
//! These structs define the JSON shapes for commands like `gly dashboard`,
//! `gly follow-ups`, `gly recompute-ltv`, and the inbound contact webhook.

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Client, Communication, Project};
use crate::errors::CoreError;

/// Inbound contact-form payload accepted by the webhook.
///
/// Only `email` is required; everything else degrades to sensible defaults
/// during intake.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InquiryPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form timeline hint; `"rush"` escalates priority to urgent.
    #[serde(default)]
    pub timeline: Option<String>,
}

impl InquiryPayload {
    /// Validate the payload before intake.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` when `email` is empty or blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.email.trim().is_empty() {
            return Err(CoreError::MissingField { field: "email" });
        }
        Ok(())
    }

    /// Split the free-form `name` field into (first, last).
    ///
    /// A single token becomes the first name with an empty last name,
    /// matching how the contact form has always been ingested.
    #[must_use]
    pub fn split_name(&self) -> (String, String) {
        let name = self.name.as_deref().unwrap_or("").trim();
        match name.split_once(' ') {
            Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
            None => (name.to_string(), String::new()),
        }
    }
}

/// Result of ingesting one webhook inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InquiryReceipt {
    pub client: Client,
    /// Whether the client record was created by this inquiry (vs. matched by email).
    pub client_created: bool,
    pub project: Project,
    pub communication: Communication,
}

/// JSON body returned by the webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WebhookAck {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub message: String,
}

impl WebhookAck {
    #[must_use]
    pub fn success(project_id: String) -> Self {
        Self {
            status: "success".into(),
            project_id: Some(project_id),
            message: "Inquiry received successfully".into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            project_id: None,
            message: message.into(),
        }
    }
}

/// One row of `gly client overview`: a client with project annotations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClientOverview {
    pub client: Client,
    pub project_count: u32,
    /// Sum of final amounts across ALL of the client's projects.
    pub total_value: Decimal,
}

/// Response from `gly dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    /// Projects currently in the open pipeline (quoted through review).
    pub active_projects: u32,
    /// Realized revenue for the current calendar month.
    pub monthly_revenue: Decimal,
    pub pending_quotes: u32,
    pub total_clients: u32,
    pub recent_projects: Vec<Project>,
    pub recent_communications: Vec<Communication>,
}

/// A drafted follow-up message (delivery is out of scope).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FollowUpDraft {
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub email: String,
    pub subject: String,
}

/// Response from `gly follow-ups`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FollowUpResponse {
    pub stale_leads: Vec<FollowUpDraft>,
    pub pending_quotes: Vec<FollowUpDraft>,
}

/// Response from `gly recompute-ltv`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecomputeResponse {
    pub clients_updated: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_email() {
        let payload = InquiryPayload::default();
        assert!(payload.validate().is_err());

        let payload = InquiryPayload {
            email: "prof@university.edu".into(),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn split_name_handles_shapes() {
        let mut payload = InquiryPayload {
            email: "x@y.edu".into(),
            name: Some("Maria Garcia Lopez".into()),
            ..Default::default()
        };
        assert_eq!(
            payload.split_name(),
            ("Maria".to_string(), "Garcia Lopez".to_string())
        );

        payload.name = Some("Cher".into());
        assert_eq!(payload.split_name(), ("Cher".to_string(), String::new()));

        payload.name = None;
        assert_eq!(payload.split_name(), (String::new(), String::new()));
    }

    #[test]
    fn webhook_ack_success_shape() {
        let ack = WebhookAck::success("prj-abc12345".into());
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["project_id"], "prj-abc12345");
    }

    #[test]
    fn webhook_ack_error_omits_project_id() {
        let ack = WebhookAck::error("Failed to process inquiry");
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json.get("project_id").is_none());
    }
}
