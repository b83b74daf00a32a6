//! Handle `gly dashboard`.

use chrono::Utc;
use rust_decimal::Decimal;

use gly_core::entities::Project;
use gly_core::enums::ProjectStatus;
use gly_core::responses::DashboardResponse;
use gly_reports::months::{at_midnight, month_floor};
use gly_reports::revenue::monthly_revenue;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Realized revenue since the start of the current calendar month.
fn current_month_revenue(
    projects: &[Project],
    now: chrono::DateTime<Utc>,
) -> Result<Decimal, gly_reports::ReportError> {
    let start = at_midnight(month_floor(now.date_naive()));
    let mut total = Decimal::ZERO;
    for bucket in monthly_revenue(projects, start, now)? {
        total += bucket.revenue;
    }
    Ok(total)
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = Utc::now();
    let recent = ctx.config.general.dashboard_recent;

    let projects = ctx.service.fetch_all_projects().await?;
    let clients = ctx.service.fetch_all_clients().await?;

    let active_projects = projects
        .iter()
        .filter(|project| project.status.is_open_pipeline())
        .count();
    let pending_quotes = projects
        .iter()
        .filter(|project| project.status == ProjectStatus::Quoted)
        .count();
    let monthly_revenue = current_month_revenue(&projects, now)?;

    let response = DashboardResponse {
        active_projects: u32::try_from(active_projects)?,
        monthly_revenue,
        pending_quotes: u32::try_from(pending_quotes)?,
        total_clients: u32::try_from(clients.len())?,
        recent_projects: ctx.service.recent_projects(recent).await?,
        recent_communications: ctx.service.recent_communications(recent.min(5)).await?,
    };

    output(&response, flags.format)
}
