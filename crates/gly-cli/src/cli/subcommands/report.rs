use clap::Subcommand;

/// Reporting commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Monthly revenue trend, project-type breakdown, and top clients.
    Revenue {
        /// How many calendar months to cover, ending with the current one.
        #[arg(long, default_value_t = 12)]
        months: u32,
    },
    /// Funnel snapshot, conversion rates, and lead-source performance.
    Pipeline,
    /// Count and revenue by dimension over completed projects.
    Breakdown {
        /// project-type or lead-source
        #[arg(long)]
        dimension: String,
        /// Restrict to projects completed within the last N months.
        #[arg(long)]
        months: Option<u32>,
    },
}
