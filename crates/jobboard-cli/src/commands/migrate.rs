//! Database migration command.

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::migration::run_migrations;

use crate::output;

/// Apply all pending migrations
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if super::is_in_memory(config) {
        output::print_warning("In-memory database configured; nothing to migrate.");
        return Ok(());
    }

    let pool = super::connect_db(config).await?;

    println!("Running database migrations...");
    run_migrations(pool.pool()).await?;
    output::print_success("All migrations applied successfully.");

    pool.close().await;
    Ok(())
}
