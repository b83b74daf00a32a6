//! Sales-funnel computation: stage counts, conversion ratios, lead sources.
//!
//! These are point-in-time snapshot ratios over the CURRENT population, not
//! cohort tracking: an inquiry converted six months ago is compared against
//! today's inquiry count. That simplification is inherited and documented,
//! not a bug to fix here.

use std::collections::HashMap;

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use gly_core::entities::{Client, Project};
use gly_core::enums::{LeadSource, ProjectStatus};

/// Count and quoted value of projects sitting in one exact pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StageSlice {
    pub status: ProjectStatus,
    pub label: String,
    pub count: u32,
    pub quoted_value: Decimal,
}

/// The three funnel ratios, as percentages. Zero whenever the denominator
/// population is empty — never a divide-by-zero fault.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ConversionRates {
    pub inquiry_to_quote: f64,
    pub quote_to_completion: f64,
    pub overall_conversion: f64,
}

/// Full funnel snapshot: one slice per stage in pipeline order, plus ratios.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FunnelSnapshot {
    pub stages: Vec<StageSlice>,
    pub conversion: ConversionRates,
}

/// Client and completed-project counts for one lead source.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SourcePerformance {
    pub lead_source: LeadSource,
    pub clients: u32,
    /// Completed projects attributed to clients from this source.
    pub converted: u32,
}

fn pct(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator) * 100.0
    }
}

/// Compute the funnel snapshot over the current project population.
///
/// Stage counts partition the project set: every project lands in exactly
/// one slice.
#[must_use]
pub fn pipeline_snapshot(projects: &[Project]) -> FunnelSnapshot {
    let mut counts: HashMap<ProjectStatus, (u32, Decimal)> = HashMap::new();
    for project in projects {
        let entry = counts.entry(project.status).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += project.quoted_amount.unwrap_or(Decimal::ZERO);
    }

    let stages: Vec<StageSlice> = ProjectStatus::ALL
        .into_iter()
        .map(|status| {
            let (count, quoted_value) = counts.get(&status).copied().unwrap_or((0, Decimal::ZERO));
            StageSlice {
                status,
                label: status.label().to_string(),
                count,
                quoted_value,
            }
        })
        .collect();

    let inquiries = counts.get(&ProjectStatus::Inquiry).map_or(0, |e| e.0);
    let completed = counts.get(&ProjectStatus::Completed).map_or(0, |e| e.0);
    let reached_quote: u32 = counts
        .iter()
        .filter(|(status, _)| status.reached_quote())
        .map(|(_, entry)| entry.0)
        .sum();

    FunnelSnapshot {
        stages,
        conversion: ConversionRates {
            inquiry_to_quote: pct(reached_quote, inquiries),
            quote_to_completion: pct(completed, reached_quote),
            overall_conversion: pct(completed, inquiries),
        },
    }
}

/// Per-source client counts and completed-project counts.
///
/// Only sources with at least one client appear. Ordered by client count
/// descending, source key ascending on ties.
#[must_use]
pub fn lead_source_performance(clients: &[Client], projects: &[Project]) -> Vec<SourcePerformance> {
    let mut by_source: HashMap<LeadSource, (u32, u32)> = HashMap::new();
    let mut client_sources: HashMap<&str, LeadSource> = HashMap::new();
    for client in clients {
        by_source.entry(client.lead_source).or_insert((0, 0)).0 += 1;
        client_sources.insert(client.id.as_str(), client.lead_source);
    }

    for project in projects {
        if project.status != ProjectStatus::Completed {
            continue;
        }
        if let Some(source) = client_sources.get(project.client_id.as_str()) {
            if let Some(entry) = by_source.get_mut(source) {
                entry.1 += 1;
            }
        }
    }

    let mut out: Vec<SourcePerformance> = by_source
        .into_iter()
        .map(|(lead_source, (clients, converted))| SourcePerformance {
            lead_source,
            clients,
            converted,
        })
        .collect();
    out.sort_by(|a, b| {
        b.clients
            .cmp(&a.clients)
            .then_with(|| a.lead_source.as_str().cmp(b.lead_source.as_str()))
    });
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use gly_core::enums::{ClientStatus, Priority, ProjectType};

    use super::*;

    fn project(id: &str, client_id: &str, status: ProjectStatus, quoted: Option<i64>) -> Project {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        Project {
            id: id.into(),
            client_id: client_id.into(),
            title: "t".into(),
            project_type: ProjectType::StandardConversion,
            description: None,
            status,
            priority: Priority::Normal,
            quoted_amount: quoted.map(Decimal::from),
            final_amount: None,
            paid: false,
            deadline: None,
            source_format: None,
            target_journal: None,
            created_at: now,
            updated_at: now,
            completed_at: (status == ProjectStatus::Completed).then_some(now),
        }
    }

    fn client(id: &str, source: LeadSource) -> Client {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        Client {
            id: id.into(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: format!("{id}@u.edu"),
            phone: None,
            institution: None,
            department: None,
            title: None,
            field_of_study: None,
            status: ClientStatus::Active,
            lead_source: source,
            lifetime_value: Decimal::ZERO,
            notes: None,
            created_at: now,
            updated_at: now,
            last_contact: None,
        }
    }

    /// 10 inquiries, 4 reaching quoted or later, 2 of those completed.
    fn funnel_population() -> Vec<Project> {
        let mut projects: Vec<Project> = (0..10)
            .map(|i| project(&format!("prj-i{i}"), "cli-1", ProjectStatus::Inquiry, None))
            .collect();
        projects.push(project("prj-q1", "cli-1", ProjectStatus::Quoted, Some(400)));
        projects.push(project("prj-q2", "cli-1", ProjectStatus::InProgress, Some(600)));
        projects.push(project("prj-c1", "cli-1", ProjectStatus::Completed, Some(800)));
        projects.push(project("prj-c2", "cli-1", ProjectStatus::Completed, Some(200)));
        projects
    }

    #[test]
    fn conversion_rates_match_reference_scenario() {
        let snapshot = pipeline_snapshot(&funnel_population());
        assert!((snapshot.conversion.inquiry_to_quote - 40.0).abs() < f64::EPSILON);
        assert!((snapshot.conversion.quote_to_completion - 50.0).abs() < f64::EPSILON);
        assert!((snapshot.conversion.overall_conversion - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stage_counts_partition_the_population() {
        let projects = funnel_population();
        let snapshot = pipeline_snapshot(&projects);
        let total: u32 = snapshot.stages.iter().map(|slice| slice.count).sum();
        assert_eq!(total as usize, projects.len());
    }

    #[test]
    fn stages_appear_in_pipeline_order_even_when_empty() {
        let snapshot = pipeline_snapshot(&[]);
        let order: Vec<ProjectStatus> = snapshot.stages.iter().map(|slice| slice.status).collect();
        assert_eq!(order, ProjectStatus::ALL.to_vec());
        assert!(snapshot.stages.iter().all(|slice| slice.count == 0));
    }

    #[test]
    fn empty_population_rates_are_zero_not_nan() {
        let snapshot = pipeline_snapshot(&[]);
        assert_eq!(snapshot.conversion.inquiry_to_quote, 0.0);
        assert_eq!(snapshot.conversion.quote_to_completion, 0.0);
        assert_eq!(snapshot.conversion.overall_conversion, 0.0);
    }

    #[test]
    fn review_counts_toward_reached_quote() {
        let projects = vec![
            project("prj-1", "cli-1", ProjectStatus::Inquiry, None),
            project("prj-2", "cli-1", ProjectStatus::Review, Some(500)),
        ];
        let snapshot = pipeline_snapshot(&projects);
        assert!((snapshot.conversion.inquiry_to_quote - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quoted_values_sum_per_stage() {
        let projects = vec![
            project("prj-1", "cli-1", ProjectStatus::Quoted, Some(400)),
            project("prj-2", "cli-1", ProjectStatus::Quoted, Some(600)),
            project("prj-3", "cli-1", ProjectStatus::Quoted, None),
        ];
        let snapshot = pipeline_snapshot(&projects);
        let quoted = snapshot
            .stages
            .iter()
            .find(|slice| slice.status == ProjectStatus::Quoted)
            .unwrap();
        assert_eq!(quoted.count, 3);
        assert_eq!(quoted.quoted_value, Decimal::from(1000));
    }

    #[test]
    fn lead_sources_count_clients_and_completed_projects() {
        let clients = vec![
            client("cli-1", LeadSource::Website),
            client("cli-2", LeadSource::Website),
            client("cli-3", LeadSource::Referral),
        ];
        let projects = vec![
            project("prj-1", "cli-1", ProjectStatus::Completed, Some(400)),
            project("prj-2", "cli-1", ProjectStatus::Completed, Some(200)),
            project("prj-3", "cli-2", ProjectStatus::Inquiry, None),
            project("prj-4", "cli-3", ProjectStatus::Completed, Some(800)),
        ];

        let performance = lead_source_performance(&clients, &projects);
        assert_eq!(performance.len(), 2);
        assert_eq!(performance[0].lead_source, LeadSource::Website);
        assert_eq!(performance[0].clients, 2);
        assert_eq!(performance[0].converted, 2);
        assert_eq!(performance[1].lead_source, LeadSource::Referral);
        assert_eq!(performance[1].converted, 1);
    }

    #[test]
    fn lead_sources_tie_break_alphabetically() {
        let clients = vec![
            client("cli-1", LeadSource::Website),
            client("cli-2", LeadSource::Conference),
        ];
        let performance = lead_source_performance(&clients, &[]);
        assert_eq!(performance[0].lead_source, LeadSource::Conference);
        assert_eq!(performance[1].lead_source, LeadSource::Website);
    }
}
