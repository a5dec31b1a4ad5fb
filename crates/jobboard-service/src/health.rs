//! Liveness and dependency health reporting.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use jobboard_core::traits::DependencyProbe;

/// Reachability of the database as seen by one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    Ok,
    Unavailable,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Process liveness. Always `"ok"` when the handler runs at all.
    pub status: String,
    /// Database reachability.
    pub db: DependencyStatus,
}

/// Builds health reports. A failing database probe is reported in `db`
/// and never turns the report itself into an error.
#[derive(Clone)]
pub struct HealthService {
    probe: Arc<dyn DependencyProbe>,
}

impl HealthService {
    pub fn new(probe: Arc<dyn DependencyProbe>) -> Self {
        Self { probe }
    }

    pub async fn report(&self) -> HealthReport {
        let db = match self.probe.check().await {
            Ok(()) => DependencyStatus::Ok,
            Err(e) => {
                warn!(dependency = self.probe.name(), error = %e, "Dependency health check failed");
                DependencyStatus::Unavailable
            }
        };

        HealthReport {
            status: "ok".to_string(),
            db,
        }
    }
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("probe", &self.probe.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jobboard_core::error::AppError;
    use jobboard_core::result::AppResult;
    use jobboard_database::repositories::MemoryJobRepository;

    struct DownProbe;

    #[async_trait]
    impl DependencyProbe for DownProbe {
        fn name(&self) -> &'static str {
            "down"
        }

        async fn check(&self) -> AppResult<()> {
            Err(AppError::database("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_reachable_database() {
        let svc = HealthService::new(Arc::new(MemoryJobRepository::new()));
        let report = svc.report().await;
        assert_eq!(report.status, "ok");
        assert_eq!(report.db, DependencyStatus::Ok);
    }

    #[tokio::test]
    async fn test_unreachable_database_is_a_flag() {
        let svc = HealthService::new(Arc::new(DownProbe));
        let report = svc.report().await;
        assert_eq!(report.status, "ok");
        assert_eq!(report.db, DependencyStatus::Unavailable);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "status": "ok", "db": "unavailable" })
        );
    }
}
