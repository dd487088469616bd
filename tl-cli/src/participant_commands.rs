use clap::Subcommand;

#[derive(Subcommand)]
pub enum ParticipantCommands {
    /// Share a list with another user
    Add {
        /// List ID
        #[arg(long)]
        list: String,
        /// Participant email
        email: String,
        /// Permission level: admin or viewer
        #[arg(long, default_value = "viewer")]
        role: String,
    },
    /// List a task list's participants
    Ls {
        /// List ID
        #[arg(long)]
        list: String,
    },
}
