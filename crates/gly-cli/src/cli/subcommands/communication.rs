use clap::Subcommand;

/// Communication log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommCommands {
    /// Log a communication with a client.
    Log {
        #[arg(long)]
        client: String,
        #[arg(long)]
        project: Option<String>,
        #[arg(long = "type")]
        communication_type: String,
        #[arg(long)]
        direction: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        content: Option<String>,
    },
    /// List communications.
    List {
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
