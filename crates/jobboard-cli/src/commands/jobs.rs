//! Job inspection commands.

use clap::{Args, Subcommand};

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_service::JobService;

use crate::output::{self, OutputFormat};

/// Arguments for the jobs command
#[derive(Debug, Args)]
pub struct JobsArgs {
    /// Jobs subcommand
    #[command(subcommand)]
    pub command: JobsCommand,
}

/// Jobs subcommands
#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// List every stored job
    List,
    /// Show one job
    Get {
        /// Job ID, e.g. CSJ-0A1B2C3D
        id: String,
    },
}

/// Execute jobs commands
pub async fn execute(
    args: &JobsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    if super::is_in_memory(config) {
        output::print_warning("In-memory database configured; it starts empty on every run.");
    }

    let service = JobService::new(super::open_repository(config).await?);

    match &args.command {
        JobsCommand::List => {
            let jobs = service.list_jobs().await?;
            output::print_jobs(&jobs, format);
        }
        JobsCommand::Get { id } => {
            let job = service.get_job(id).await?;
            output::print_job(&job, format);
        }
    }

    Ok(())
}
