//! Handle `gly follow-ups`.
//!
//! Finds leads that went quiet and quotes nobody answered, and drafts the
//! follow-up subjects. Sending email is someone else's job.

use chrono::{Duration, Utc};

use gly_core::entities::{Client, Project};
use gly_core::responses::{FollowUpDraft, FollowUpResponse};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

fn lead_subject(client: &Client) -> String {
    format!(
        "Follow-up: LaTeX services for {}",
        client.institution.as_deref().unwrap_or("your research")
    )
}

fn quote_subject(project: &Project) -> String {
    format!("Quote follow-up: {}", project.title)
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = Utc::now();
    let lead_cutoff = now - Duration::days(i64::from(ctx.config.followup.lead_days));
    let quote_cutoff = now - Duration::days(i64::from(ctx.config.followup.quote_days));

    let stale_leads = ctx
        .service
        .stale_leads(lead_cutoff)
        .await?
        .into_iter()
        .map(|client| {
            let subject = lead_subject(&client);
            FollowUpDraft {
                client_id: client.id,
                project_id: None,
                email: client.email,
                subject,
            }
        })
        .collect();

    let mut pending_quotes = Vec::new();
    for project in ctx.service.pending_quotes(quote_cutoff).await? {
        let client = ctx.service.get_client(&project.client_id).await?;
        pending_quotes.push(FollowUpDraft {
            client_id: client.id,
            project_id: Some(project.id.clone()),
            email: client.email,
            subject: quote_subject(&project),
        });
    }

    output(
        &FollowUpResponse {
            stale_leads,
            pending_quotes,
        },
        flags.format,
    )
}
