//! In-process job repository.
//!
//! Selected with a `memory://` database URL for local development and used
//! by the API test-suite. Data lives for the lifetime of the process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_core::traits::{DependencyProbe, Repository};
use jobboard_entity::job::JobRow;

/// URL scheme that selects [`MemoryJobRepository`].
pub const MEMORY_URL_SCHEME: &str = "memory://";

/// Job repository backed by a vector kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryJobRepository {
    rows: RwLock<Vec<JobRow>>,
}

impl MemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `url` selects the in-memory backend.
    pub fn handles(url: &str) -> bool {
        url.starts_with(MEMORY_URL_SCHEME)
    }
}

#[async_trait]
impl Repository<JobRow, str> for MemoryJobRepository {
    async fn list_all(&self) -> AppResult<Vec<JobRow>> {
        Ok(self.rows.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<JobRow>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.id.as_str() == id)
            .cloned())
    }

    async fn insert(&self, row: &JobRow) -> AppResult<JobRow> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id == row.id) {
            return Err(AppError::conflict(format!(
                "Job with ID '{}' already exists",
                row.id
            )));
        }
        rows.push(row.clone());
        Ok(row.clone())
    }

    async fn insert_many(&self, batch: &[JobRow]) -> AppResult<u64> {
        let mut rows = self.rows.write().await;
        for (i, row) in batch.iter().enumerate() {
            let clash = rows.iter().chain(&batch[..i]).any(|r| r.id == row.id);
            if clash {
                return Err(AppError::conflict(format!(
                    "Job with ID '{}' already exists",
                    row.id
                )));
            }
        }
        rows.extend_from_slice(batch);
        Ok(batch.len() as u64)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.read().await.len() as u64)
    }
}

#[async_trait]
impl DependencyProbe for MemoryJobRepository {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn check(&self) -> AppResult<()> {
        Ok(())
    }
}
