pub mod init;
pub mod nextdate;
pub mod task;

use crate::libs::error::TaskError;
use anyhow::Result;
use clap::{Parser, Subcommand};
use thiserror::Error;

/// Exit status for any failure that is not rejected input.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status when the input itself was rejected.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Context attached to an error that has already been printed as JSON.
#[derive(Debug, Error)]
#[error("error already reported")]
pub struct Rendered;

/// True if the error output was already written by the command.
pub fn is_rendered(err: &anyhow::Error) -> bool {
    err.is::<Rendered>()
}

pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<TaskError>() {
        Some(task_err) if task_err.is_validation() => EXIT_INVALID_INPUT,
        _ => EXIT_FAILURE,
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(name = "nextdate", about = "Calculate the next date of a repeat rule")]
    NextDate(nextdate::NextDateArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::NextDate(args) => nextdate::cmd(args),
        }
    }
}
