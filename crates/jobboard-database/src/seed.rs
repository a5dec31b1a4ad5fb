//! Idempotent sample-data loader.
//!
//! Run once at deployment time (`jobboard-cli seed`). Request handlers
//! never read this data directly; it only reaches them through the table.

use std::str::FromStr;

use serde_json::Value;
use tracing::info;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_core::traits::Repository;
use jobboard_core::types::JobId;
use jobboard_entity::job::{JobRow, from_create_request};

const SEED_JOBS: &str = include_str!("../seed/jobs.json");

/// What a seed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and this many rows were inserted.
    Inserted(u64),
    /// The table already held this many rows; nothing was written.
    Skipped(u64),
}

/// Parse the bundled sample jobs.
///
/// Entries use the wire format plus an explicit `id`, and go through the
/// same validation as `POST /jobs`.
pub fn seed_rows() -> AppResult<Vec<JobRow>> {
    let entries: Vec<Value> = serde_json::from_str(SEED_JOBS)?;

    entries
        .iter()
        .map(|entry| {
            let raw_id = entry.get("id").and_then(Value::as_str).unwrap_or_default();
            let id = JobId::from_str(raw_id)
                .map_err(|e| AppError::configuration(format!("Invalid seed job: {e}")))?;
            let job = from_create_request(entry).map_err(|errors| {
                AppError::configuration(format!("Invalid seed job '{raw_id}': {errors:?}"))
            })?;
            Ok(job.into_row(id))
        })
        .collect()
}

/// Insert the sample jobs unless the table already has rows.
///
/// All rows are written in one transaction, so a failed run leaves the
/// table empty and can simply be retried.
pub async fn seed_jobs(repo: &dyn Repository<JobRow, str>) -> AppResult<SeedOutcome> {
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, "Database already contains jobs, skipping seed");
        return Ok(SeedOutcome::Skipped(existing));
    }

    let rows = seed_rows()?;
    let inserted = repo.insert_many(&rows).await?;
    info!(inserted, "Seeded database with sample jobs");
    Ok(SeedOutcome::Inserted(inserted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryJobRepository;

    #[test]
    fn test_seed_rows_are_valid() {
        let rows = seed_rows().expect("bundled seed data parses");
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| JobId::is_well_formed(r.id.as_str())));
        assert_eq!(rows[0].title, "Policy Advisor");
        assert_eq!(rows[0].job_numbers, Some(1));
        assert_eq!(rows[1].salary, None);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = MemoryJobRepository::new();

        let first = seed_jobs(&repo).await.expect("seed");
        assert_eq!(first, SeedOutcome::Inserted(4));

        let second = seed_jobs(&repo).await.expect("seed again");
        assert_eq!(second, SeedOutcome::Skipped(4));
        assert_eq!(repo.count().await.unwrap(), 4);
    }
}
