//! Landing page and fallback handlers.

use axum::Json;
use axum::http::StatusCode;

use crate::dto::response::{ErrorResponse, LandingResponse};

/// GET /
pub async fn index() -> Json<LandingResponse> {
    Json(LandingResponse {
        service: "jobboard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "GET /jobs".to_string(),
            "GET /jobs/{id}".to_string(),
            "POST /jobs".to_string(),
            "GET /health".to_string(),
        ],
    })
}

/// Any unmatched route.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: serde_json::Value::String("Not Found".to_string()),
        }),
    )
}
