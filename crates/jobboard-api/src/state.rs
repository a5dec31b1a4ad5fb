//! Application state shared across all handlers.

use std::sync::Arc;

use jobboard_core::config::AppConfig;
use jobboard_core::traits::{DependencyProbe, Repository};
use jobboard_entity::job::JobRow;
use jobboard_service::{HealthService, JobService};

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// Holds no per-request data; the only shared resource underneath is the
/// repository's connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Job use cases
    pub job_service: Arc<JobService>,
    /// Health reporting
    pub health_service: Arc<HealthService>,
}

impl AppState {
    /// Wire services over a repository and a database probe.
    pub fn new(
        config: AppConfig,
        repo: Arc<dyn Repository<JobRow, str>>,
        probe: Arc<dyn DependencyProbe>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            job_service: Arc::new(JobService::new(repo)),
            health_service: Arc::new(HealthService::new(probe)),
        }
    }
}
