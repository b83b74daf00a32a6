//! Revenue aggregation: monthly trends, dimension breakdowns, top clients.
//!
//! Realized revenue is the sum of `final_amount` over COMPLETED projects,
//! attributed to the month of `completed_at`. A missing `final_amount`
//! contributes zero. The one deliberate exception is [`top_clients`], which
//! sums across all of a client's projects regardless of status — see the
//! design notes; the inconsistency is inherited and flagged, not unified.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use gly_core::entities::{Client, Project};
use gly_core::enums::ProjectStatus;

use crate::error::ReportError;
use crate::months::MonthBuckets;

/// One calendar-month bucket of realized revenue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthlyRevenue {
    /// Sort-friendly bucket label, e.g. `"2026-03"`.
    pub month: String,
    /// Human bucket label, e.g. `"March 2026"`.
    pub month_name: String,
    pub revenue: Decimal,
    pub projects: u32,
}

/// Dimensions a revenue breakdown can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownDimension {
    ProjectType,
    LeadSource,
}

/// One slice of a dimension breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DimensionSlice {
    pub key: String,
    pub count: u32,
    pub revenue: Decimal,
}

/// One row of the top-clients ranking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClientValue {
    pub client_id: String,
    pub name: String,
    pub institution: Option<String>,
    pub project_count: u32,
    pub total_value: Decimal,
}

/// Range totals for the revenue report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RevenueSummary {
    pub total_revenue: Decimal,
    pub total_projects: u32,
    /// Average final amount across all completed projects carrying one,
    /// independent of the requested range.
    pub avg_project_value: Decimal,
}

fn realized(project: &Project) -> Decimal {
    project.final_amount.unwrap_or(Decimal::ZERO)
}

fn completed_within(project: &Project, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    project.status == ProjectStatus::Completed
        && project
            .completed_at
            .is_some_and(|at| at >= start && at < end)
}

/// Monthly realized-revenue series over `[start, end)`.
///
/// Returns a lazy, restartable (Clone) sequence; months with no completed
/// projects report zero revenue and zero count rather than being omitted.
///
/// # Errors
///
/// Returns [`ReportError::InvalidRange`] when `end` is before `start`.
pub fn monthly_revenue(
    projects: &[Project],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<impl Iterator<Item = MonthlyRevenue> + Clone + '_, ReportError> {
    let buckets = MonthBuckets::new(start, end)?;
    Ok(buckets.map(move |(bucket_start, bucket_end)| {
        let mut revenue = Decimal::ZERO;
        let mut count: u32 = 0;
        for project in projects {
            if completed_within(project, bucket_start, bucket_end) {
                revenue += realized(project);
                count += 1;
            }
        }
        MonthlyRevenue {
            month: bucket_start.format("%Y-%m").to_string(),
            month_name: bucket_start.format("%B %Y").to_string(),
            revenue,
            projects: count,
        }
    }))
}

/// Count and revenue of completed projects grouped by `dimension`, ordered by
/// descending revenue (ties by key ascending).
///
/// `since` restricts to projects completed on or after the cutoff. For the
/// lead-source dimension, attribution resolves through the owning client;
/// projects whose client is absent from `clients` are skipped.
#[must_use]
pub fn revenue_breakdown(
    projects: &[Project],
    clients: &[Client],
    dimension: BreakdownDimension,
    since: Option<DateTime<Utc>>,
) -> Vec<DimensionSlice> {
    let sources: HashMap<&str, &'static str> = clients
        .iter()
        .map(|client| (client.id.as_str(), client.lead_source.as_str()))
        .collect();

    let mut slices: HashMap<&str, (u32, Decimal)> = HashMap::new();
    for project in projects {
        if project.status != ProjectStatus::Completed {
            continue;
        }
        if let Some(cutoff) = since {
            if !project.completed_at.is_some_and(|at| at >= cutoff) {
                continue;
            }
        }
        let key = match dimension {
            BreakdownDimension::ProjectType => project.project_type.as_str(),
            BreakdownDimension::LeadSource => match sources.get(project.client_id.as_str()) {
                Some(source) => *source,
                None => continue,
            },
        };
        let entry = slices.entry(key).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += realized(project);
    }

    let mut out: Vec<DimensionSlice> = slices
        .into_iter()
        .map(|(key, (count, revenue))| DimensionSlice {
            key: key.to_string(),
            count,
            revenue,
        })
        .collect();
    out.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.key.cmp(&b.key)));
    out
}

/// Clients ranked by summed final amounts across ALL their projects.
///
/// Filtered to totals above zero, descending, ties broken by client id
/// ascending; at most `limit` rows.
#[must_use]
pub fn top_clients(clients: &[Client], projects: &[Project], limit: usize) -> Vec<ClientValue> {
    let mut totals: HashMap<&str, (u32, Decimal)> = HashMap::new();
    for project in projects {
        let entry = totals
            .entry(project.client_id.as_str())
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += realized(project);
    }

    let mut out: Vec<ClientValue> = clients
        .iter()
        .filter_map(|client| {
            let (project_count, total_value) = totals.get(client.id.as_str()).copied()?;
            if total_value <= Decimal::ZERO {
                return None;
            }
            Some(ClientValue {
                client_id: client.id.clone(),
                name: client.full_name(),
                institution: client.institution.clone(),
                project_count,
                total_value,
            })
        })
        .collect();
    out.sort_by(|a, b| {
        b.total_value
            .cmp(&a.total_value)
            .then_with(|| a.client_id.cmp(&b.client_id))
    });
    out.truncate(limit);
    out
}

/// Range totals plus the global average completed-project value.
///
/// # Errors
///
/// Returns [`ReportError::InvalidRange`] when `end` is before `start`.
pub fn revenue_summary(
    projects: &[Project],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<RevenueSummary, ReportError> {
    let mut total_revenue = Decimal::ZERO;
    let mut total_projects: u32 = 0;
    for bucket in monthly_revenue(projects, start, end)? {
        total_revenue += bucket.revenue;
        total_projects += bucket.projects;
    }

    let mut priced = Decimal::ZERO;
    let mut priced_count: u32 = 0;
    for project in projects {
        if project.status == ProjectStatus::Completed {
            if let Some(amount) = project.final_amount {
                priced += amount;
                priced_count += 1;
            }
        }
    }
    let avg_project_value = if priced_count == 0 {
        Decimal::ZERO
    } else {
        priced / Decimal::from(priced_count)
    };

    Ok(RevenueSummary {
        total_revenue,
        total_projects,
        avg_project_value,
    })
}
