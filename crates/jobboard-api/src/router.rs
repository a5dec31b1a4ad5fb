//! Route definitions for the Jobboard HTTP API.

use axum::{
    Router, middleware as axum_middleware,
    routing::get,
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request logging.
///
/// Transport layers (compression, CORS, tracing) are added by
/// [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::index))
        .route("/health", get(handlers::health::health))
        .merge(job_routes())
        .fallback(handlers::root::not_found)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Job listing, lookup, and creation
fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            get(handlers::jobs::list_jobs).post(handlers::jobs::create_job),
        )
        .route("/jobs/{id}", get(handlers::jobs::get_job))
}
