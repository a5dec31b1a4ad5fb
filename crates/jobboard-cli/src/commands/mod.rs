//! CLI command definitions and dispatch.

pub mod jobs;
pub mod migrate;
pub mod seed;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_core::traits::Repository;
use jobboard_database::DatabasePool;
use jobboard_database::repositories::{JobRepository, MemoryJobRepository};
use jobboard_entity::job::JobRow;

/// Jobboard job postings service
#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects `config/{env}.toml`)
    #[arg(short, long, env = "JOBBOARD_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply database migrations
    Migrate,
    /// Load the sample jobs into an empty database
    Seed,
    /// Inspect stored jobs
    Jobs(jobs::JobsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;
        tracing::debug!(env = %self.env, "Configuration loaded");
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Seed => seed::execute(&config).await,
            Commands::Jobs(args) => jobs::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: whether the configured database lives only in this process
pub fn is_in_memory(config: &AppConfig) -> bool {
    MemoryJobRepository::handles(&config.database.url)
}

/// Helper: connect to the configured PostgreSQL database
pub async fn connect_db(config: &AppConfig) -> Result<DatabasePool, AppError> {
    tracing::debug!("Opening database pool");
    DatabasePool::connect(&config.database).await
}

/// Helper: open the configured job store for reading.
///
/// Never issues DDL; run `migrate` or `seed` to create the schema.
pub async fn open_repository(
    config: &AppConfig,
) -> Result<Arc<dyn Repository<JobRow, str>>, AppError> {
    if is_in_memory(config) {
        tracing::debug!("Using in-memory job store");
        return Ok(Arc::new(MemoryJobRepository::new()));
    }

    Ok(Arc::new(JobRepository::new(connect_db(config).await?)))
}
