//! Handlers for `gly report ...`.

use chrono::Utc;
use serde::Serialize;

use gly_reports::funnel::{FunnelSnapshot, SourcePerformance, lead_source_performance, pipeline_snapshot};
use gly_reports::months::{at_midnight, month_floor, sub_months};
use gly_reports::revenue::{
    BreakdownDimension, ClientValue, DimensionSlice, MonthlyRevenue, RevenueSummary,
    monthly_revenue, revenue_breakdown, revenue_summary, top_clients,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Response from `gly report revenue`.
#[derive(Debug, Serialize)]
struct RevenueReport {
    months: Vec<MonthlyRevenue>,
    project_types: Vec<DimensionSlice>,
    top_clients: Vec<ClientValue>,
    summary: RevenueSummary,
}

/// Response from `gly report pipeline`.
#[derive(Debug, Serialize)]
struct PipelineReport {
    #[serde(flatten)]
    funnel: FunnelSnapshot,
    lead_sources: Vec<SourcePerformance>,
}

/// Response from `gly report breakdown`.
#[derive(Debug, Serialize)]
struct BreakdownReport {
    dimension: BreakdownDimension,
    slices: Vec<DimensionSlice>,
}

pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let now = Utc::now();
    let projects = ctx.service.fetch_all_projects().await?;
    let clients = ctx.service.fetch_all_clients().await?;

    match action {
        ReportCommands::Revenue { months } => {
            // N calendar months ending with the current one.
            let start = at_midnight(month_floor(sub_months(
                now.date_naive(),
                months.saturating_sub(1),
            )));

            let series: Vec<MonthlyRevenue> = monthly_revenue(&projects, start, now)?.collect();
            let project_types = revenue_breakdown(
                &projects,
                &clients,
                BreakdownDimension::ProjectType,
                Some(start),
            );
            let report = RevenueReport {
                months: series,
                project_types,
                top_clients: top_clients(&clients, &projects, 10),
                summary: revenue_summary(&projects, start, now)?,
            };
            output(&report, flags.format)
        }
        ReportCommands::Pipeline => {
            let report = PipelineReport {
                funnel: pipeline_snapshot(&projects),
                lead_sources: lead_source_performance(&clients, &projects),
            };
            output(&report, flags.format)
        }
        ReportCommands::Breakdown { dimension, months } => {
            let dimension = parse_enum::<BreakdownDimension>(dimension, "dimension")?;
            let since = months.map(|months| {
                at_midnight(month_floor(sub_months(
                    now.date_naive(),
                    months.saturating_sub(1),
                )))
            });
            let report = BreakdownReport {
                dimension,
                slices: revenue_breakdown(&projects, &clients, dimension, since),
            };
            output(&report, flags.format)
        }
    }
}
