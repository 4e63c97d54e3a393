use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Register a project against its groupId/artifactId coordinates
    Register {
        project_id: String,

        group_id: String,

        artifact_id: String,
    },

    /// Refresh a version from the artifact repository
    Refresh {
        group_id: String,

        artifact_id: String,

        version: String,

        #[arg(short, long)]
        project_id: Option<String>,

        /// Validate dependencies transitively against the repository
        #[arg(short, long)]
        transitive: bool,

        #[arg(long)]
        parent_event_id: Option<String>,
    },

    /// Validate a refresh notification without processing it
    Validate {
        group_id: String,

        artifact_id: String,

        version: String,

        #[arg(short, long)]
        project_id: Option<String>,
    },

    /// Exclude a version from future refreshes
    Exclude {
        group_id: String,

        artifact_id: String,

        version: String,

        #[arg(short, long)]
        reason: String,
    },

    Versions {
        group_id: String,

        artifact_id: String,
    },

    Show {
        group_id: String,

        artifact_id: String,

        version: String,
    },

    Latest {
        group_id: String,

        artifact_id: String,
    },

    /// Process every queued refresh notification
    Drain,
}
