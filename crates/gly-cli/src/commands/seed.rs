//! Handle `gly seed` — development test data.
//!
//! Creates a spread of clients and projects with believable academic names,
//! backdated timestamps, and a realistic mix of pipeline states, then runs
//! the lifetime-value batch so reports have something to chew on.

use anyhow::Context;
use chrono::{Duration, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use serde::Serialize;

use gly_core::enums::{ClientStatus, LeadSource, Priority, ProjectStatus, ProjectType};
use gly_db::repos::client::NewClient;
use gly_db::repos::project::NewProject;
use gly_db::updates::project::ProjectUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::context::AppContext;
use crate::output::output;

const INSTITUTIONS: &[&str] = &[
    "MIT",
    "Stanford University",
    "UC Berkeley",
    "Harvard University",
    "University of Chicago",
    "Yale University",
    "Princeton University",
    "Columbia University",
    "University of Michigan",
    "Cornell University",
];

const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Economics",
    "Political Science",
    "Psychology",
    "Mathematics",
    "Physics",
    "Biology",
    "Chemistry",
    "Statistics",
    "Public Policy",
    "Sociology",
    "Philosophy",
];

const FIRST_NAMES: &[&str] = &[
    "James", "Maria", "John", "Sarah", "Michael", "Jennifer", "David", "Lisa", "Robert", "Karen",
    "William", "Nancy", "Richard", "Betty",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez",
];

const TITLES: &[&str] = &["PhD Candidate", "Professor", "Associate Professor", "Postdoc"];

const PROJECT_TITLES: &[&str] = &[
    "Machine Learning in Healthcare Applications",
    "Economic Impact of Climate Change Policies",
    "Social Media Influence on Political Behavior",
    "Quantum Computing Applications in Cryptography",
    "Behavioral Economics and Consumer Decision Making",
    "Neural Networks for Natural Language Processing",
    "Public Policy Analysis Framework",
    "Statistical Methods for Big Data Analysis",
];

const JOURNALS: &[&str] = &[
    "Nature",
    "Science",
    "PNAS",
    "American Economic Review",
    "American Political Science Review",
    "Journal of Marketing Research",
];

const SOURCE_FORMATS: &[&str] = &["Word", "LaTeX", "Markdown"];
const AMOUNTS: &[i64] = &[200, 400, 600, 800, 1200];

const CLIENT_STATUSES: &[ClientStatus] =
    &[ClientStatus::Lead, ClientStatus::Active, ClientStatus::Completed];
const SOURCES: &[LeadSource] = &[
    LeadSource::Website,
    LeadSource::Referral,
    LeadSource::Social,
    LeadSource::Conference,
];
const TARGET_STATUSES: &[ProjectStatus] = &[
    ProjectStatus::Inquiry,
    ProjectStatus::Quoted,
    ProjectStatus::InProgress,
    ProjectStatus::Completed,
];
const PRIORITIES: &[Priority] = &[
    Priority::Low,
    Priority::Normal,
    Priority::High,
    Priority::Urgent,
];
const TYPES: &[ProjectType] = &[
    ProjectType::QuickFix,
    ProjectType::StandardConversion,
    ProjectType::PremiumWorkflow,
];

/// xorshift64* seeded from the OS. Plenty for sample data.
struct Rng(u64);

impl Rng {
    fn new() -> anyhow::Result<Self> {
        let mut seed = [0u8; 8];
        getrandom::fill(&mut seed)
            .map_err(|error| anyhow::anyhow!("failed to seed rng: {error}"))?;
        Ok(Self(u64::from_le_bytes(seed) | 1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound.max(1)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[usize::try_from(self.below(items.len() as u64)).unwrap_or(0)]
    }

    /// Random day count in `[lo, hi]`.
    fn days(&mut self, lo: u64, hi: u64) -> i64 {
        i64::try_from(lo + self.below(hi.saturating_sub(lo) + 1)).unwrap_or(1)
    }
}

/// Transitions needed to legally reach `target` from a fresh inquiry.
fn path_to(target: ProjectStatus) -> &'static [ProjectStatus] {
    match target {
        ProjectStatus::Quoted => &[ProjectStatus::Quoted],
        ProjectStatus::Approved => &[ProjectStatus::Quoted, ProjectStatus::Approved],
        ProjectStatus::InProgress => &[
            ProjectStatus::Quoted,
            ProjectStatus::Approved,
            ProjectStatus::InProgress,
        ],
        ProjectStatus::Review => &[
            ProjectStatus::Quoted,
            ProjectStatus::Approved,
            ProjectStatus::InProgress,
            ProjectStatus::Review,
        ],
        ProjectStatus::Completed => &[
            ProjectStatus::Quoted,
            ProjectStatus::Approved,
            ProjectStatus::InProgress,
            ProjectStatus::Review,
            ProjectStatus::Completed,
        ],
        ProjectStatus::Cancelled => &[ProjectStatus::Cancelled],
        ProjectStatus::Inquiry => &[],
    }
}

#[derive(Serialize)]
struct SeedResponse {
    clients_created: u32,
    projects_created: u32,
    clients_updated: u32,
}

fn progress(len: u64, label: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message(label.to_string());
    bar
}

#[allow(clippy::too_many_lines)]
pub async fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rng = Rng::new()?;
    let now = Utc::now();
    let conn = ctx.service.db().conn();

    let bar = progress(u64::from(args.clients), "Creating clients", flags.quiet);
    let mut client_ids = Vec::with_capacity(args.clients as usize);
    for i in 0..args.clients {
        let first = *rng.pick(FIRST_NAMES);
        let last = *rng.pick(LAST_NAMES);
        let client = ctx
            .service
            .create_client(NewClient {
                first_name: first.into(),
                last_name: last.into(),
                email: format!("{}.{}{i}@university.edu", first.to_lowercase(), last.to_lowercase()),
                institution: Some((*rng.pick(INSTITUTIONS)).into()),
                department: Some((*rng.pick(DEPARTMENTS)).into()),
                title: Some((*rng.pick(TITLES)).into()),
                field_of_study: Some((*rng.pick(DEPARTMENTS)).into()),
                status: *rng.pick(CLIENT_STATUSES),
                lead_source: *rng.pick(SOURCES),
                notes: None,
                phone: None,
            })
            .await
            .context("seed: create client")?;

        // Spread sign-ups over the past year.
        let created = now - Duration::days(rng.days(1, 365));
        conn.execute(
            "UPDATE clients SET created_at = ?1 WHERE id = ?2",
            libsql::params![created.to_rfc3339(), client.id.as_str()],
        )
        .await?;

        client_ids.push(client.id);
        bar.inc(1);
    }
    bar.finish();

    if client_ids.is_empty() && args.projects > 0 {
        anyhow::bail!("cannot seed projects without clients (pass --clients > 0)");
    }

    let bar = progress(u64::from(args.projects), "Creating projects", flags.quiet);
    for _ in 0..args.projects {
        let client_id = rng.pick(&client_ids).clone();
        let created = now - Duration::days(rng.days(1, 180));
        let target = *rng.pick(TARGET_STATUSES);

        let project = ctx
            .service
            .create_project(NewProject {
                client_id,
                title: (*rng.pick(PROJECT_TITLES)).into(),
                project_type: *rng.pick(TYPES),
                description: Some(
                    "Academic project requiring LaTeX formatting and conversion services.".into(),
                ),
                priority: *rng.pick(PRIORITIES),
                quoted_amount: Some(Decimal::from(*rng.pick(AMOUNTS))),
                deadline: Some(now + Duration::days(rng.days(1, 30))),
                source_format: Some((*rng.pick(SOURCE_FORMATS)).into()),
                target_journal: Some((*rng.pick(JOURNALS)).into()),
            })
            .await
            .context("seed: create project")?;

        for status in path_to(target) {
            ctx.service.transition_project(&project.id, *status).await?;
        }

        conn.execute(
            "UPDATE projects SET created_at = ?1 WHERE id = ?2",
            libsql::params![created.to_rfc3339(), project.id.as_str()],
        )
        .await?;

        if target == ProjectStatus::Completed {
            ctx.service
                .update_project(
                    &project.id,
                    ProjectUpdateBuilder::new()
                        .final_amount(Some(Decimal::from(*rng.pick(AMOUNTS))))
                        .paid(true)
                        .build(),
                )
                .await?;

            // Completion lands somewhere between creation and today.
            let completed = created + Duration::days(rng.days(1, 60));
            let completed = completed.min(now);
            conn.execute(
                "UPDATE projects SET completed_at = ?1 WHERE id = ?2",
                libsql::params![completed.to_rfc3339(), project.id.as_str()],
            )
            .await?;
        }
        bar.inc(1);
    }
    bar.finish();

    let clients_updated = ctx.service.recompute_lifetime_values().await?;

    output(
        &SeedResponse {
            clients_created: args.clients,
            projects_created: args.projects,
            clients_updated,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_pick_stays_in_bounds() {
        let mut rng = Rng(42);
        for _ in 0..1000 {
            let n = *rng.pick(AMOUNTS);
            assert!(AMOUNTS.contains(&n));
        }
    }

    #[test]
    fn rng_days_respects_range() {
        let mut rng = Rng(7);
        for _ in 0..1000 {
            let d = rng.days(1, 30);
            assert!((1..=30).contains(&d));
        }
    }

    #[test]
    fn paths_end_at_their_target() {
        for target in ProjectStatus::ALL {
            let path = path_to(target);
            match target {
                ProjectStatus::Inquiry => assert!(path.is_empty()),
                _ => assert_eq!(path.last(), Some(&target)),
            }
        }
    }

    #[test]
    fn paths_are_legal_walks() {
        for target in TARGET_STATUSES {
            let mut current = ProjectStatus::Inquiry;
            for next in path_to(*target) {
                assert!(
                    current.can_transition_to(*next),
                    "{current} -> {next} must be legal"
                );
                current = *next;
            }
        }
    }
}
