//! Display-hint mappings for the presentation layer.
//!
//! Pure value → tag functions; rendering (ANSI colors, HTML classes) is the
//! consumer's business. The analytics core never touches these.

use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Project;
use crate::enums::{Priority, ProjectStatus};

/// Color tag for a pipeline stage.
#[must_use]
pub const fn status_hint(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Inquiry => "gray",
        ProjectStatus::Quoted => "orange",
        ProjectStatus::Approved => "blue",
        ProjectStatus::InProgress => "purple",
        ProjectStatus::Review => "teal",
        ProjectStatus::Completed => "green",
        ProjectStatus::Cancelled => "red",
    }
}

/// Color tag for a priority level.
#[must_use]
pub const fn priority_hint(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "red",
        Priority::High => "orange",
        Priority::Normal => "green",
        Priority::Low => "gray",
    }
}

/// Urgency classification of a project deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineHint {
    /// Deadline passed and the project is not completed.
    Overdue,
    /// Three days or fewer remain.
    DueSoon,
    /// A deadline exists and is not close.
    Scheduled,
    /// No deadline set.
    None,
}

impl DeadlineHint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::Scheduled => "scheduled",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DeadlineHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a project's deadline as of `now`.
///
/// Terminal projects are never urgent: their deadline is history.
#[must_use]
pub fn deadline_hint(project: &Project, now: DateTime<Utc>) -> DeadlineHint {
    let Some(deadline) = project.deadline else {
        return DeadlineHint::None;
    };
    if project.status.is_terminal() {
        return DeadlineHint::Scheduled;
    }
    if deadline < now {
        return DeadlineHint::Overdue;
    }
    if deadline - now <= Duration::days(3) {
        return DeadlineHint::DueSoon;
    }
    DeadlineHint::Scheduled
}
