//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn health_check_returns_ok_without_token() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_check_reports_status_up() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    let json = body_json(response).await;

    assert_eq!(json["status"], "UP");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/definitely-not-a-route").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
