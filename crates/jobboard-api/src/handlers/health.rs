//! Health check handler.

use axum::Json;
use axum::extract::State;

use jobboard_service::HealthReport;

use crate::state::AppState;

/// GET /health
///
/// Always 200. Database trouble shows up as `"db": "unavailable"`.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.health_service.report().await)
}
