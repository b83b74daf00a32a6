use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, ProjectStatus, ProjectType};

/// A formatting project moving through the sales pipeline.
///
/// Invariant: `completed_at` is non-null iff `status == Completed`; the
/// project repo stamps it on that transition and nowhere else.
/// `final_amount` determines realized revenue only once the project is
/// completed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub project_type: ProjectType,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub quoted_amount: Option<Decimal>,
    pub final_amount: Option<Decimal>,
    pub paid: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub source_format: Option<String>,
    pub target_journal: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Whether the deadline has passed without the project being completed.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| deadline < now)
            && self.status != ProjectStatus::Completed
    }

    /// Whole days remaining until the deadline (negative once past it).
    #[must_use]
    pub fn days_until_deadline(&self, now: DateTime<Utc>) -> Option<i64> {
        self.deadline.map(|deadline| (deadline - now).num_days())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn project(status: ProjectStatus, deadline: Option<DateTime<Utc>>) -> Project {
        Project {
            id: "prj-1".into(),
            client_id: "cli-1".into(),
            title: "Thesis conversion".into(),
            project_type: ProjectType::StandardConversion,
            description: None,
            status,
            priority: Priority::Normal,
            quoted_amount: None,
            final_amount: None,
            paid: false,
            deadline,
            source_format: None,
            target_journal: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: None,
        }
    }

    #[test]
    fn overdue_when_deadline_passed_and_not_completed() {
        let now = Utc::now();
        let p = project(ProjectStatus::InProgress, Some(now - Duration::days(2)));
        assert!(p.is_overdue(now));
    }

    #[test]
    fn not_overdue_when_completed() {
        let now = Utc::now();
        let p = project(ProjectStatus::Completed, Some(now - Duration::days(2)));
        assert!(!p.is_overdue(now));
    }

    #[test]
    fn not_overdue_without_deadline() {
        let now = Utc::now();
        let p = project(ProjectStatus::InProgress, None);
        assert!(!p.is_overdue(now));
        assert_eq!(p.days_until_deadline(now), None);
    }

    #[test]
    fn days_until_deadline_counts_whole_days() {
        let now = Utc::now();
        let p = project(ProjectStatus::Quoted, Some(now + Duration::days(5)));
        assert_eq!(p.days_until_deadline(now), Some(5));
    }
}
