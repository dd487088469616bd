use clap::Subcommand;

#[derive(Subcommand)]
pub enum ListCommands {
    /// List every task list you own or participate in
    Ls,
    /// Create a task list (you become owner and Admin)
    Create {
        /// List name
        name: String,
    },
    /// Rename a task list
    Rename {
        /// List ID
        id: String,
        /// New name
        name: String,
    },
    /// Delete a task list
    Delete {
        /// List ID
        id: String,
    },
    /// Show a task list with its tasks and participants
    Show {
        /// List ID
        id: String,
    },
}
