//! Job posting handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use jobboard_core::error::AppError;
use jobboard_entity::job::{FieldError, Job, ValidationErrors};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /jobs
pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, ApiError> {
    Ok(Json(state.job_service.list_jobs().await?))
}

/// GET /jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(state.job_service.get_job(&id).await?))
}

/// POST /jobs
///
/// The body is taken as raw JSON so that type errors are reported per
/// field instead of as one deserialization failure.
pub async fn create_job(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        AppError::from(ValidationErrors::from(FieldError::malformed_body(
            rejection.body_text(),
        )))
    })?;

    let job = state.job_service.create_job(&body).await?;
    Ok((StatusCode::CREATED, Json(job)))
}
