//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested resource does not exist. Rendered as 404 with empty body.
    #[error("Not found")]
    NotFound,

    /// Structured client error carrying the entity name and an error-code
    /// token (`idexists`, `idnull`, `idnoexists`, ...).
    #[error("Bad request for {entity_name}: {message}")]
    BadRequestAlert {
        entity_name: &'static str,
        error_key: &'static str,
        message: String,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Shorthand for the structured bad-request response used by the
    /// resource handlers.
    pub fn bad_request_alert(
        entity_name: &'static str,
        error_key: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::BadRequestAlert {
            entity_name,
            error_key,
            message: message.into(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<&'static str>,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Absent resources answer with an empty body
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::BadRequestAlert {
                entity_name,
                error_key,
                message,
            } => {
                let body = ErrorResponse {
                    entity_name: Some(entity_name),
                    error_key: Some(error_key),
                    message,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::Unauthorized(message) => {
                let body = ErrorResponse {
                    entity_name: None,
                    error_key: None,
                    message,
                };
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
            AppError::Forbidden(message) => {
                let body = ErrorResponse {
                    entity_name: None,
                    error_key: None,
                    message,
                };
                (StatusCode::FORBIDDEN, Json(body)).into_response()
            }
            AppError::Validation(message) => {
                let body = ErrorResponse {
                    entity_name: None,
                    error_key: None,
                    message,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                let body = ErrorResponse {
                    entity_name: None,
                    error_key: None,
                    message: "Internal server error".into(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                let body = ErrorResponse {
                    entity_name: None,
                    error_key: None,
                    message: "Internal server error".into(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_alert_carries_entity_and_key() {
        let err = AppError::bad_request_alert("alumno", "idexists", "id already set");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_response_skips_absent_fields() {
        let body = ErrorResponse {
            entity_name: None,
            error_key: None,
            message: "boom".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"boom"}"#);
    }

    #[test]
    fn error_response_uses_camel_case_keys() {
        let body = ErrorResponse {
            entity_name: Some("curso"),
            error_key: Some("idnull"),
            message: "an update requires an id".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""entityName":"curso""#));
        assert!(json.contains(r#""errorKey":"idnull""#));
    }
}
