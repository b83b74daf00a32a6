//! Client lifetime value.
//!
//! A pure function from one client's projects to their lifetime value. The
//! batch that walks every client and persists the result lives in the store
//! layer; this crate never mutates anything.

use rust_decimal::Decimal;

use gly_core::entities::Project;
use gly_core::enums::ProjectStatus;

/// Lifetime value of a client: the sum of final amounts over the COMPLETED
/// projects among `projects` (expected to be that client's full project
/// list). Missing final amounts contribute zero.
#[must_use]
pub fn lifetime_value(projects: &[Project]) -> Decimal {
    projects
        .iter()
        .filter(|project| project.status == ProjectStatus::Completed)
        .filter_map(|project| project.final_amount)
        .sum()
}
