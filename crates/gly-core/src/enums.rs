//! Status enums and choice types for Galley.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `ProjectStatus` models the sales pipeline and provides `allowed_next_states()`
//! to enforce valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ClientStatus
// ---------------------------------------------------------------------------

/// Where a client sits in the relationship lifecycle.
///
/// Client status is operator-managed and freely editable; only the project
/// pipeline enforces transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Lead,
    Contacted,
    Active,
    Completed,
    Inactive,
}

impl ClientStatus {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Contacted => "contacted",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LeadSource
// ---------------------------------------------------------------------------

/// How a client first found the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Website,
    Referral,
    Social,
    Conference,
    Email,
    Other,
}

impl LeadSource {
    /// All sources, in display order.
    pub const ALL: [Self; 6] = [
        Self::Website,
        Self::Referral,
        Self::Social,
        Self::Conference,
        Self::Email,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Referral => "referral",
            Self::Social => "social",
            Self::Conference => "conference",
            Self::Email => "email",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectType
// ---------------------------------------------------------------------------

/// Service tier for a formatting project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    QuickFix,
    StandardConversion,
    PremiumWorkflow,
    Custom,
}

impl ProjectType {
    pub const ALL: [Self; 4] = [
        Self::QuickFix,
        Self::StandardConversion,
        Self::PremiumWorkflow,
        Self::Custom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuickFix => "quick_fix",
            Self::StandardConversion => "standard_conversion",
            Self::PremiumWorkflow => "premium_workflow",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Pipeline stage of a project.
///
/// ```text
/// inquiry → quoted → approved → in_progress → review → completed
///                                           ↑         |
///                                           +---------+  (revision round)
/// any non-terminal state → cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Inquiry,
    Quoted,
    Approved,
    InProgress,
    Review,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    /// All pipeline stages, in funnel order.
    pub const ALL: [Self; 7] = [
        Self::Inquiry,
        Self::Quoted,
        Self::Approved,
        Self::InProgress,
        Self::Review,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Inquiry => &[Self::Quoted, Self::Cancelled],
            Self::Quoted => &[Self::Approved, Self::Cancelled],
            Self::Approved => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::Review, Self::Cancelled],
            Self::Review => &[Self::InProgress, Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the project has left the inquiry stage with a quote in hand.
    ///
    /// This is the "reached quote" population used by funnel conversion
    /// ratios: quoted, approved, in_progress, review, or completed.
    #[must_use]
    pub const fn reached_quote(self) -> bool {
        matches!(
            self,
            Self::Quoted | Self::Approved | Self::InProgress | Self::Review | Self::Completed
        )
    }

    /// Whether the project sits in the open pipeline (quoted through review).
    ///
    /// Used for the active-project dashboard count and the overdue filter.
    #[must_use]
    pub const fn is_open_pipeline(self) -> bool {
        matches!(
            self,
            Self::Quoted | Self::Approved | Self::InProgress | Self::Review
        )
    }

    /// Whether the state accepts no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inquiry => "inquiry",
            Self::Quoted => "quoted",
            Self::Approved => "approved",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Human-readable stage label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inquiry => "Initial Inquiry",
            Self::Quoted => "Quote Sent",
            Self::Approved => "Quote Approved",
            Self::InProgress => "In Progress",
            Self::Review => "Client Review",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Scheduling priority of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FileType
// ---------------------------------------------------------------------------

/// Role of an attached file within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Source,
    Output,
    Reference,
    Revision,
}

impl FileType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Output => "output",
            Self::Reference => "reference",
            Self::Revision => "revision",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CommunicationType
// ---------------------------------------------------------------------------

/// Channel of a logged communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationType {
    Email,
    Call,
    Meeting,
    Note,
}

impl CommunicationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Call => "call",
            Self::Meeting => "meeting",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for CommunicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Direction of a logged communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Inbound,
    Outbound,
    Internal,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(client_lead, ClientStatus, ClientStatus::Lead, "lead");
    test_serde_roundtrip!(
        client_contacted,
        ClientStatus,
        ClientStatus::Contacted,
        "contacted"
    );

    test_serde_roundtrip!(source_website, LeadSource, LeadSource::Website, "website");
    test_serde_roundtrip!(
        source_conference,
        LeadSource,
        LeadSource::Conference,
        "conference"
    );

    test_serde_roundtrip!(
        type_quick_fix,
        ProjectType,
        ProjectType::QuickFix,
        "quick_fix"
    );
    test_serde_roundtrip!(
        type_premium,
        ProjectType,
        ProjectType::PremiumWorkflow,
        "premium_workflow"
    );

    test_serde_roundtrip!(status_inquiry, ProjectStatus, ProjectStatus::Inquiry, "inquiry");
    test_serde_roundtrip!(
        status_in_progress,
        ProjectStatus,
        ProjectStatus::InProgress,
        "in_progress"
    );
    test_serde_roundtrip!(
        status_cancelled,
        ProjectStatus,
        ProjectStatus::Cancelled,
        "cancelled"
    );

    test_serde_roundtrip!(priority_urgent, Priority, Priority::Urgent, "urgent");
    test_serde_roundtrip!(file_source, FileType, FileType::Source, "source");
    test_serde_roundtrip!(
        comm_meeting,
        CommunicationType,
        CommunicationType::Meeting,
        "meeting"
    );
    test_serde_roundtrip!(direction_inbound, Direction, Direction::Inbound, "inbound");

    // --- Transition tests ---

    #[test]
    fn pipeline_valid_transitions() {
        assert!(ProjectStatus::Inquiry.can_transition_to(ProjectStatus::Quoted));
        assert!(ProjectStatus::Quoted.can_transition_to(ProjectStatus::Approved));
        assert!(ProjectStatus::Approved.can_transition_to(ProjectStatus::InProgress));
        assert!(ProjectStatus::InProgress.can_transition_to(ProjectStatus::Review));
        assert!(ProjectStatus::Review.can_transition_to(ProjectStatus::Completed));
        assert!(ProjectStatus::Review.can_transition_to(ProjectStatus::InProgress));
    }

    #[test]
    fn pipeline_invalid_transitions() {
        assert!(!ProjectStatus::Inquiry.can_transition_to(ProjectStatus::Completed));
        assert!(!ProjectStatus::Inquiry.can_transition_to(ProjectStatus::Approved));
        assert!(!ProjectStatus::Quoted.can_transition_to(ProjectStatus::Review));
        assert!(!ProjectStatus::Completed.can_transition_to(ProjectStatus::Inquiry));
        assert!(!ProjectStatus::Cancelled.can_transition_to(ProjectStatus::Inquiry));
    }

    #[test]
    fn cancellation_reachable_from_every_open_state() {
        for status in ProjectStatus::ALL {
            if status.is_terminal() {
                assert!(!status.can_transition_to(ProjectStatus::Cancelled));
            } else {
                assert!(
                    status.can_transition_to(ProjectStatus::Cancelled),
                    "{status} should allow cancellation"
                );
            }
        }
    }

    #[test]
    fn terminal_states_have_no_next_states() {
        assert!(ProjectStatus::Completed.allowed_next_states().is_empty());
        assert!(ProjectStatus::Cancelled.allowed_next_states().is_empty());
    }

    #[test]
    fn reached_quote_excludes_inquiry_and_cancelled() {
        assert!(!ProjectStatus::Inquiry.reached_quote());
        assert!(!ProjectStatus::Cancelled.reached_quote());
        assert!(ProjectStatus::Quoted.reached_quote());
        assert!(ProjectStatus::Review.reached_quote());
        assert!(ProjectStatus::Completed.reached_quote());
    }

    #[test]
    fn open_pipeline_excludes_endpoints() {
        assert!(!ProjectStatus::Inquiry.is_open_pipeline());
        assert!(!ProjectStatus::Completed.is_open_pipeline());
        assert!(!ProjectStatus::Cancelled.is_open_pipeline());
        assert!(ProjectStatus::Quoted.is_open_pipeline());
        assert!(ProjectStatus::InProgress.is_open_pipeline());
    }

    // --- Display / as_str tests ---

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ClientStatus::Inactive), "inactive");
        assert_eq!(format!("{}", LeadSource::Social), "social");
        assert_eq!(format!("{}", ProjectType::StandardConversion), "standard_conversion");
        assert_eq!(format!("{}", ProjectStatus::InProgress), "in_progress");
        assert_eq!(format!("{}", Priority::Normal), "normal");
        assert_eq!(format!("{}", FileType::Revision), "revision");
        assert_eq!(format!("{}", CommunicationType::Note), "note");
        assert_eq!(format!("{}", Direction::Internal), "internal");
    }

    #[test]
    fn stage_labels_are_human_readable() {
        assert_eq!(ProjectStatus::Inquiry.label(), "Initial Inquiry");
        assert_eq!(ProjectStatus::Review.label(), "Client Review");
    }
}
