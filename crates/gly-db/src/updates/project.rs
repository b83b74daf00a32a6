//! Project update builder.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use gly_core::enums::{Priority, ProjectType};

/// Partial update for a project. Status is deliberately absent: the pipeline
/// only moves through `transition_project`, which owns the `completed_at`
/// invariant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_amount: Option<Option<Decimal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_amount: Option<Option<Decimal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_format: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_journal: Option<Option<String>>,
}

pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.0.project_type = Some(project_type);
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn quoted_amount(mut self, quoted_amount: Option<Decimal>) -> Self {
        self.0.quoted_amount = Some(quoted_amount);
        self
    }

    #[must_use]
    pub fn final_amount(mut self, final_amount: Option<Decimal>) -> Self {
        self.0.final_amount = Some(final_amount);
        self
    }

    #[must_use]
    pub fn paid(mut self, paid: bool) -> Self {
        self.0.paid = Some(paid);
        self
    }

    #[must_use]
    pub fn deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.0.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn source_format(mut self, source_format: Option<String>) -> Self {
        self.0.source_format = Some(source_format);
        self
    }

    #[must_use]
    pub fn target_journal(mut self, target_journal: Option<String>) -> Self {
        self.0.target_journal = Some(target_journal);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}

impl Default for ProjectUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
