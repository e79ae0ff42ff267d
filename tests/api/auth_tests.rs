//! Authentication API Tests
//!
//! Every route under /api requires a valid bearer token.

use axum::{body::Body, http::Request, http::StatusCode};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;

use quechua_server::presentation::middleware::Claims;

use crate::common::{body_json, expired_token_for, TestApp, TEST_JWT_SECRET};

#[tokio::test]
async fn request_without_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get("/api/alumnos").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_with_garbage_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get_auth("/api/departamentos", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_with_expired_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get_auth("/api/cursos", &expired_token_for(1)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Token expired");
}

#[tokio::test]
async fn non_bearer_authorization_header_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/carreras")
                .header("Authorization", "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_with_non_numeric_subject_is_unauthorized() {
    let app = TestApp::new();

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "not-a-user-id".to_string(),
        auth: "ROLE_USER".to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app.get_auth("/api/coloquios", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
