use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tl")]
#[command(about = "Shared task lists CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config directory (overrides TL_CONFIG_DIR and ./.tl/)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
