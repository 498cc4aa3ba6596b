//! Integration tests for health endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["status"], "healthy");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health/ready", None).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["status"], "ready");
    assert_eq!(response["checks"]["database"]["status"], "healthy");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health/live", None).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["status"], "alive");
}
