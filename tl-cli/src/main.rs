//! tl - shared task lists CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in and look around
//! tl login --email a@x.com --password s3cret
//! tl list ls --pretty
//!
//! # Work inside a list
//! tl task add --list <id> "Milk" --description "2 litres"
//! tl participant add --list <id> b@x.com --role viewer
//! ```

mod cli;
mod commands;
mod list_commands;
mod participant_commands;
mod task_commands;

use crate::{
    cli::Cli, commands::Commands, list_commands::ListCommands,
    participant_commands::ParticipantCommands, task_commands::TaskCommands,
};

use tl_cli::screens::{ScreenContext, home, list_detail};
use tl_cli::{AppError, Result as AppResult, SessionState, logger};

use tl_config::Config;
use tl_core::Role;
use tl_identity::{IdentityService, ProviderClient, SnapshotStore};
use tl_store::DocumentStore;

use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use serde_json::{Value, json};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.config_dir {
        // Before the runtime spawns any threads
        unsafe { std::env::set_var("TL_CONFIG_DIR", dir) };
    }

    // Single-threaded, event-driven: one command, sequential awaits
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch(cli.command, &config).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load, validate and apply config; logger comes up as early as possible
fn load_config() -> AppResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(config.logging.level, config.log_path()?, config.logging.colored)?;
    config.log_summary();

    Ok(config)
}

/// One shared reqwest client with the configured timeouts
fn http_client(config: &Config) -> AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .connect_timeout(Duration::from_secs(config.http.connect_timeout_secs))
        .build()?;
    Ok(client)
}

fn identity_service(config: &Config) -> AppResult<IdentityService> {
    let client = http_client(config)?;
    let provider =
        ProviderClient::with_client(&config.identity.base_url, &config.identity.api_key, client.clone());
    let snapshot = SnapshotStore::new(config.session_path()?);
    Ok(IdentityService::with_client(
        provider,
        &config.store.base_url,
        snapshot,
        client,
    ))
}

/// Restore the persisted session or refuse the command
async fn require_session(config: &Config) -> AppResult<ScreenContext> {
    let service = identity_service(config)?;
    let user = service
        .restore_session()
        .await?
        .ok_or(AppError::NotSignedIn)?;

    let session = SessionState::from(user);
    let store =
        DocumentStore::with_client(&config.store.base_url, &session.token, http_client(config)?);
    Ok(ScreenContext::new(store, session))
}

async fn dispatch(command: Commands, config: &Config) -> AppResult<Value> {
    match command {
        // Auth commands
        Commands::Register {
            name,
            email,
            password,
        } => {
            // The registration form always granted the legacy global role
            // "Admin"; it is opaque profile metadata, nothing gates on it
            let service = identity_service(config)?;
            let user = service.register(&name, &email, &password, "Admin").await?;
            Ok(serde_json::to_value(&user.identity)?)
        }

        Commands::Login { email, password } => {
            let service = identity_service(config)?;
            let user = service.login(&email, &password).await?;
            Ok(serde_json::to_value(&user.identity)?)
        }

        Commands::Logout => {
            let service = identity_service(config)?;
            let signed_out = service.logout_current().await?;
            Ok(json!({ "signed_out": signed_out }))
        }

        Commands::Whoami => {
            let service = identity_service(config)?;
            match service.restore_session().await? {
                Some(user) => Ok(serde_json::to_value(&user.identity)?),
                None => Ok(json!({ "signed_in": false })),
            }
        }

        // Task list commands
        Commands::List { action } => {
            let ctx = require_session(config).await?;
            let view = match action {
                ListCommands::Ls => serde_json::to_value(home::load(&ctx).await?)?,
                ListCommands::Create { name } => {
                    serde_json::to_value(home::create_list(&ctx, &name).await?)?
                }
                ListCommands::Rename { id, name } => {
                    serde_json::to_value(home::rename_list(&ctx, &id, &name).await?)?
                }
                ListCommands::Delete { id } => {
                    serde_json::to_value(home::delete_list(&ctx, &id).await?)?
                }
                ListCommands::Show { id } => {
                    serde_json::to_value(list_detail::load(&ctx, &id).await?)?
                }
            };
            Ok(view)
        }

        // Task commands
        Commands::Task { action } => {
            let ctx = require_session(config).await?;
            let view = match action {
                TaskCommands::Ls { list } => {
                    let view = list_detail::load(&ctx, &list).await?;
                    serde_json::to_value(view.tasks)?
                }
                TaskCommands::Add {
                    list,
                    name,
                    description,
                } => serde_json::to_value(
                    list_detail::add_task(&ctx, &list, &name, &description).await?,
                )?,
                TaskCommands::Edit {
                    list,
                    task_id,
                    name,
                    description,
                } => serde_json::to_value(
                    list_detail::edit_task(&ctx, &list, &task_id, &name, &description).await?,
                )?,
                TaskCommands::Rm { list, task_id } => {
                    serde_json::to_value(list_detail::remove_task(&ctx, &list, &task_id).await?)?
                }
                TaskCommands::Toggle { list, task_id } => {
                    serde_json::to_value(list_detail::toggle_task(&ctx, &list, &task_id).await?)?
                }
            };
            Ok(view)
        }

        // Participant commands
        Commands::Participant { action } => {
            let ctx = require_session(config).await?;
            let view = match action {
                ParticipantCommands::Add { list, email, role } => {
                    let role = Role::from_str(&role)?;
                    serde_json::to_value(
                        list_detail::add_participant(&ctx, &list, &email, role).await?,
                    )?
                }
                ParticipantCommands::Ls { list } => {
                    let view = list_detail::load(&ctx, &list).await?;
                    serde_json::to_value(view.participants)?
                }
            };
            Ok(view)
        }
    }
}
