use crate::{
    list_commands::ListCommands, participant_commands::ParticipantCommands,
    task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and sign in
    Register {
        /// Display name for the profile record
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in with an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out and clear the local session
    Logout,

    /// Show the signed-in identity
    Whoami,

    /// Task list operations
    List {
        #[command(subcommand)]
        action: ListCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Participant operations
    Participant {
        #[command(subcommand)]
        action: ParticipantCommands,
    },
}
