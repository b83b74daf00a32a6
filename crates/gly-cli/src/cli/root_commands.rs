use clap::{Args, Subcommand};

use crate::cli::subcommands::{ClientCommands, CommCommands, ProjectCommands, ReportCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize galley for a project directory.
    Init,
    /// Clients.
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Communications.
    Comm {
        #[command(subcommand)]
        action: CommCommands,
    },
    /// Studio stats and recent activity.
    Dashboard,
    /// Revenue and pipeline reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Recompute client lifetime values.
    #[command(name = "recompute-ltv")]
    RecomputeLtv,
    /// Scan for stale leads and unanswered quotes.
    #[command(name = "follow-ups")]
    FollowUps,
    /// Generate test data for development.
    Seed(SeedArgs),
    /// Run the contact-form webhook listener.
    Webhook(WebhookArgs),
}

/// Arguments for `gly seed`.
#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Number of clients to create
    #[arg(long, default_value_t = 20)]
    pub clients: u32,
    /// Number of projects to create
    #[arg(long, default_value_t = 30)]
    pub projects: u32,
}

/// Arguments for `gly webhook`.
#[derive(Clone, Debug, Args)]
pub struct WebhookArgs {
    /// Port to listen on (defaults to webhook.port from config)
    #[arg(long)]
    pub port: Option<u16>,
}
