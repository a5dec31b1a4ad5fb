//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingResponse {
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
    /// Available routes, `"METHOD /path"`.
    pub endpoints: Vec<String>,
}

/// Error body. `detail` is a message string for most errors and a list
/// of field errors for validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}
