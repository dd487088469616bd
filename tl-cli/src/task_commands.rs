use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks in a task list
    Ls {
        /// Parent list ID
        #[arg(long)]
        list: String,
    },
    /// Add a task (starts incomplete)
    Add {
        /// Parent list ID
        #[arg(long)]
        list: String,
        /// Task name
        name: String,
        /// Task description
        #[arg(long)]
        description: String,
    },
    /// Edit a task's name and description
    Edit {
        /// Parent list ID
        #[arg(long)]
        list: String,
        /// Task ID
        task_id: String,
        /// New name
        #[arg(long)]
        name: String,
        /// New description
        #[arg(long)]
        description: String,
    },
    /// Remove a task
    Rm {
        /// Parent list ID
        #[arg(long)]
        list: String,
        /// Task ID
        task_id: String,
    },
    /// Toggle a task's completion (allowed for any role)
    Toggle {
        /// Parent list ID
        #[arg(long)]
        list: String,
        /// Task ID
        task_id: String,
    },
}
