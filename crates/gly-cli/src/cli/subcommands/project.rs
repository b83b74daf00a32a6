use clap::Subcommand;

/// Project entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project (always enters the pipeline as an inquiry).
    Create {
        #[arg(long)]
        client: String,
        #[arg(long)]
        title: String,
        #[arg(long = "type")]
        project_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        quoted: Option<String>,
        /// Deadline as RFC 3339 or YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        source_format: Option<String>,
        #[arg(long)]
        target_journal: Option<String>,
    },
    /// Get a project by ID.
    Get { id: String },
    /// Update a project.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "type")]
        project_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        quoted: Option<String>,
        #[arg(long)]
        final_amount: Option<String>,
        #[arg(long)]
        paid: Option<bool>,
        /// Deadline as RFC 3339 or YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        source_format: Option<String>,
        #[arg(long)]
        target_journal: Option<String>,
    },
    /// List projects.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// Only open-pipeline projects past their deadline.
        #[arg(long)]
        overdue: bool,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Move a project to the next pipeline stage.
    Transition { id: String, status: String },
    /// Attach a file record to a project.
    Attach {
        id: String,
        #[arg(long = "type")]
        file_type: String,
        #[arg(long)]
        filename: String,
        #[arg(long)]
        path: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        version: Option<String>,
    },
    /// List a project's file records.
    Files { id: String },
}
