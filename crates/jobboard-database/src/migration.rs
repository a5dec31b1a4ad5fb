//! Schema initialization.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use jobboard_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Ensure the `jobs` table and its indexes exist.
///
/// Safe to call on every startup: applied migrations are skipped and the
/// DDL itself only creates what is missing.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Ensuring database schema...");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database schema ready");
    Ok(())
}
