//! Client update builder.

use serde::Serialize;

use gly_core::enums::{ClientStatus, LeadSource};

/// Partial update for a client. `Option<Option<_>>` fields distinguish
/// "leave unchanged" from "set to NULL". `lifetime_value` is deliberately
/// absent: it only moves through the recompute batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_source: Option<LeadSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

pub struct ClientUpdateBuilder(ClientUpdate);

impl ClientUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ClientUpdate::default())
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.0.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.0.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.0.phone = Some(phone);
        self
    }

    #[must_use]
    pub fn institution(mut self, institution: Option<String>) -> Self {
        self.0.institution = Some(institution);
        self
    }

    #[must_use]
    pub fn department(mut self, department: Option<String>) -> Self {
        self.0.department = Some(department);
        self
    }

    #[must_use]
    pub fn title(mut self, title: Option<String>) -> Self {
        self.0.title = Some(title);
        self
    }

    #[must_use]
    pub fn field_of_study(mut self, field_of_study: Option<String>) -> Self {
        self.0.field_of_study = Some(field_of_study);
        self
    }

    #[must_use]
    pub fn status(mut self, status: ClientStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn lead_source(mut self, lead_source: LeadSource) -> Self {
        self.0.lead_source = Some(lead_source);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> ClientUpdate {
        self.0
    }
}

impl Default for ClientUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
