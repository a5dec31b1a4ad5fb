//! # jobboard-api
//!
//! HTTP API layer for Jobboard built on Axum.
//!
//! Provides the job endpoints, the health probe and landing page,
//! middleware (CORS, compression, request logging), and the mapping from
//! [`jobboard_core::AppError`] to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
