//! Health Check Handler

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. No authentication and no database access.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
