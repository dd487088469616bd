//! tl-cli library
//!
//! Exports the session and screen orchestration layers for use in
//! integration tests; the `tl` binary drives them from clap commands.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod list_commands;
pub(crate) mod participant_commands;
pub(crate) mod task_commands;

pub mod error;
pub mod logger;
pub mod screens;
pub mod session;

pub use error::{AppError, Result};
pub use session::SessionState;
