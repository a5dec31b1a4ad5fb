//! Sample data loader.

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::migration::run_migrations;
use jobboard_database::repositories::JobRepository;
use jobboard_database::seed::{SeedOutcome, seed_jobs};

use crate::output;

/// Insert the bundled sample jobs unless the table already has rows.
///
/// Creates the schema first if it is missing.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if super::is_in_memory(config) {
        output::print_warning(
            "In-memory database configured; seeded jobs would be lost on exit. Nothing to seed.",
        );
        return Ok(());
    }

    let pool = super::connect_db(config).await?;
    run_migrations(pool.pool()).await?;
    let repo = JobRepository::new(pool.clone());

    let outcome = seed_jobs(&repo).await?;
    tracing::debug!(?outcome, "Seed finished");
    match outcome {
        SeedOutcome::Inserted(n) => {
            output::print_success(&format!("Seeded database with {n} sample jobs."));
        }
        SeedOutcome::Skipped(n) => {
            output::print_warning(&format!(
                "Database already contains {n} jobs. Skipping seed."
            ));
        }
    }

    pool.close().await;
    Ok(())
}
