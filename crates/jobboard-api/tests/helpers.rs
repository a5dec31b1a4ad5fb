//! Shared test helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use jobboard_api::{AppState, build_app};
use jobboard_core::config::AppConfig;
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_core::traits::{DependencyProbe, Repository};
use jobboard_database::repositories::MemoryJobRepository;
use jobboard_entity::job::JobRow;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct inspection
    pub repo: Arc<dyn Repository<JobRow, str>>,
}

/// A database probe that always fails.
pub struct DownProbe;

#[async_trait]
impl DependencyProbe for DownProbe {
    fn name(&self) -> &'static str {
        "down"
    }

    async fn check(&self) -> AppResult<()> {
        Err(AppError::database("connection refused"))
    }
}

/// A repository whose every call fails with one error kind.
pub struct FailingRepository {
    kind: ErrorKind,
    message: &'static str,
}

impl FailingRepository {
    /// Storage is unreachable.
    pub fn outage() -> Self {
        Self {
            kind: ErrorKind::Database,
            message: "connection refused (os error 111)",
        }
    }

    /// Every write collides with an existing id.
    pub fn conflict() -> Self {
        Self {
            kind: ErrorKind::Conflict,
            message: "Job with ID 'CSJ-00000001' already exists",
        }
    }

    fn fail<T>(&self) -> AppResult<T> {
        Err(AppError::new(self.kind, self.message))
    }
}

#[async_trait]
impl Repository<JobRow, str> for FailingRepository {
    async fn list_all(&self) -> AppResult<Vec<JobRow>> {
        self.fail()
    }

    async fn get_by_id(&self, _id: &str) -> AppResult<Option<JobRow>> {
        self.fail()
    }

    async fn insert(&self, _row: &JobRow) -> AppResult<JobRow> {
        self.fail()
    }

    async fn insert_many(&self, _rows: &[JobRow]) -> AppResult<u64> {
        self.fail()
    }

    async fn count(&self) -> AppResult<u64> {
        self.fail()
    }
}

impl TestApp {
    /// Create a test application over an empty in-memory store
    pub fn new() -> Self {
        let repo = Arc::new(MemoryJobRepository::new());
        Self::with_probe(repo.clone(), repo)
    }

    /// Create a test application whose database probe always fails
    pub fn with_unreachable_db() -> Self {
        let repo = Arc::new(MemoryJobRepository::new());
        Self::with_probe(repo, Arc::new(DownProbe))
    }

    /// Create a test application over the given repository
    pub fn with_repository(repo: Arc<dyn Repository<JobRow, str>>) -> Self {
        Self::with_probe(repo, Arc::new(DownProbe))
    }

    fn with_probe(
        repo: Arc<dyn Repository<JobRow, str>>,
        probe: Arc<dyn DependencyProbe>,
    ) -> Self {
        let state = AppState::new(AppConfig::default(), repo.clone(), probe);
        Self {
            router: build_app(state),
            repo,
        }
    }

    /// Number of stored jobs
    pub async fn job_count(&self) -> u64 {
        self.repo.count().await.expect("Failed to count jobs")
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, "application/json", body_str)
            .await
    }

    /// Send a request with a raw body and content type
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: String,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Test HTTP response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// A minimal valid create payload.
pub fn analyst_payload() -> Value {
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

/// `CSJ-` followed by eight uppercase hex digits.
pub fn is_job_id(value: &Value) -> bool {
    value.as_str().is_some_and(|s| {
        s.len() == 12
            && s.starts_with("CSJ-")
            && s[4..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    })
}
