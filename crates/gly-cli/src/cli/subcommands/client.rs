use clap::Subcommand;

/// Client entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// Create a client.
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        institution: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        field_of_study: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        lead_source: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a client by ID.
    Get { id: String },
    /// Update a client.
    Update {
        id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        institution: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        lead_source: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List clients.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Clients annotated with project counts and summed value.
    Overview {
        #[arg(long)]
        limit: Option<u32>,
    },
}
