//! Application builder. Wires repositories, services, router and
//! middleware into a running Axum server.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::DatabasePool;
use jobboard_database::migration::run_migrations;
use jobboard_database::repositories::{JobRepository, MemoryJobRepository};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// CORS settings come from `state.config.server.cors`.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Opens the configured backend and wires the services over it.
///
/// A `memory://` database URL selects the in-process store. Any other URL
/// is treated as PostgreSQL: the pool is opened and the schema brought up
/// to date before the state is returned.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    if MemoryJobRepository::handles(&config.database.url) {
        tracing::warn!("Using in-memory job store; data is lost on shutdown");
        let repo = Arc::new(MemoryJobRepository::new());
        return Ok(AppState::new(config, repo.clone(), repo));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    run_migrations(pool.pool()).await?;

    let repo = Arc::new(JobRepository::new(pool.clone()));
    Ok(AppState::new(config, repo, Arc::new(pool)))
}

/// Runs the Jobboard server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Jobboard server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Jobboard server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Jobboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
