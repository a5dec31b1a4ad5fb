//! Job posting use cases.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use jobboard_core::error::AppError;
use jobboard_core::traits::Repository;
use jobboard_core::types::JobId;
use jobboard_entity::job::{Job, JobRow, from_create_request, to_wire};

/// Lists, fetches, and creates job postings.
#[derive(Clone)]
pub struct JobService {
    /// Job repository.
    repo: Arc<dyn Repository<JobRow, str>>,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(repo: Arc<dyn Repository<JobRow, str>>) -> Self {
        Self { repo }
    }

    /// Returns every job in insertion order.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        let rows = self.repo.list_all().await?;
        debug!(count = rows.len(), "Listed jobs");
        Ok(rows.into_iter().map(to_wire).collect())
    }

    /// Returns one job, or `NotFound` naming the requested id.
    pub async fn get_job(&self, id: &str) -> Result<Job, AppError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(to_wire)
            .ok_or_else(|| AppError::not_found(format!("Job with ID '{id}' not found")))
    }

    /// Validates a create payload, assigns a fresh id, and stores the job.
    ///
    /// Nothing is written when validation fails.
    pub async fn create_job(&self, payload: &Value) -> Result<Job, AppError> {
        let new_job = from_create_request(payload)?;
        let row = new_job.into_row(JobId::generate());
        let stored = self.repo.insert(&row).await?;
        info!(job_id = %stored.id, title = %stored.title, "Job created");
        Ok(to_wire(stored))
    }
}

impl std::fmt::Debug for JobService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::error::ErrorKind;
    use jobboard_database::repositories::MemoryJobRepository;
    use serde_json::json;

    fn service() -> (JobService, Arc<MemoryJobRepository>) {
        let repo = Arc::new(MemoryJobRepository::new());
        (JobService::new(repo.clone()), repo)
    }

    fn analyst() -> Value {
        json!({
            "title": "Analyst",
            "description": "d",
            "organisation": "Home Office",
            "location": "London",
            "grade": "G7",
            "assignmentType": "Permanent",
            "personalSpec": "spec",
            "recruitmentEmail": "r@x.gov"
        })
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (svc, _) = service();
        let created = svc.create_job(&analyst()).await.expect("create");
        assert!(JobId::is_well_formed(created.id.as_str()));
        assert!(!created.contacts);
        assert_eq!(created.summary, None);

        let fetched = svc.get_job(created.id.as_str()).await.expect("get");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_names_id() {
        let (svc, _) = service();
        let err = svc.get_job("CSJ-12345678").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Job with ID 'CSJ-12345678' not found");
    }

    #[tokio::test]
    async fn test_invalid_create_writes_nothing() {
        let (svc, repo) = service();
        let mut body = analyst();
        body.as_object_mut().expect("object").remove("title");

        let err = svc.create_job(&body).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.details.is_some());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_returns_created_jobs_in_order() {
        let (svc, _) = service();
        let mut ids = Vec::new();
        for title in ["one", "two", "three"] {
            let mut body = analyst();
            body["title"] = json!(title);
            ids.push(svc.create_job(&body).await.expect("create").id);
        }

        let listed: Vec<JobId> = svc
            .list_jobs()
            .await
            .expect("list")
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(listed, ids);
    }
}
