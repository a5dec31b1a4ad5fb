//! Integration tests for the health probe and landing page.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_health_with_reachable_db() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "ok", "db": "ok" }));
}

#[tokio::test]
async fn test_health_with_unreachable_db_still_200() {
    let app = TestApp::with_unreachable_db();
    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "ok", "db": "unavailable" }));
}

#[tokio::test]
async fn test_landing_page_lists_endpoints() {
    let app = TestApp::new();
    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["service"], "jobboard");
    let endpoints = response.body["endpoints"].as_array().expect("endpoints");
    assert!(endpoints.contains(&json!("GET /jobs")));
    assert!(endpoints.contains(&json!("POST /jobs")));
}
