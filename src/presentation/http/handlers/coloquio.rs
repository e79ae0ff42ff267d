//! Coloquio Handlers
//!
//! Colloquium CRUD plus the per-curso listing. Deletion is a soft delete
//! that flips the estado to ELIMINADO.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::application::dto::{ColoquioPayload, ColoquioQueryParams};
use crate::application::services::{ColoquioError, ColoquioService, ColoquioServiceImpl};
use crate::infrastructure::repositories::{PgColoquioRepository, PgCursoRepository};
use crate::shared::alert::{creation_alert, deletion_alert, update_alert};
use crate::shared::error::AppError;
use crate::startup::AppState;

const ENTITY_NAME: &str = "coloquio";

fn build_service(state: &AppState) -> ColoquioServiceImpl<PgColoquioRepository, PgCursoRepository> {
    ColoquioServiceImpl::new(
        Arc::new(PgColoquioRepository::new(state.db.clone())),
        Arc::new(PgCursoRepository::new(state.db.clone())),
    )
}

fn map_error(error: ColoquioError) -> AppError {
    match error {
        ColoquioError::IdAlreadySet => AppError::bad_request_alert(
            ENTITY_NAME,
            "idexists",
            "A new coloquio cannot already have an ID",
        ),
        ColoquioError::IdMissing => {
            AppError::bad_request_alert(ENTITY_NAME, "idnull", "An update requires an ID")
        }
        ColoquioError::NotFound => AppError::NotFound,
        ColoquioError::CursoInexistente => AppError::bad_request_alert(
            "curso",
            "idnoexists",
            "No existe el curso con id provisto",
        ),
        ColoquioError::Internal(message) => AppError::Internal(message),
    }
}

/// POST /api/coloquios
pub async fn create_coloquio(
    State(state): State<AppState>,
    Json(payload): Json<ColoquioPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?payload, "REST request to save coloquio");
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = build_service(&state);
    let coloquio = service.create(payload).await.map_err(map_error)?;

    let mut headers = creation_alert(ENTITY_NAME, coloquio.id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/coloquios/{}", coloquio.id)) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(coloquio)))
}

/// PUT /api/coloquios
pub async fn update_coloquio(
    State(state): State<AppState>,
    Json(payload): Json<ColoquioPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?payload, "REST request to update coloquio");
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = build_service(&state);
    let coloquio = service.update(payload).await.map_err(map_error)?;

    Ok((update_alert(ENTITY_NAME, coloquio.id), Json(coloquio)))
}

/// GET /api/coloquios
pub async fn get_all_coloquios(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let coloquios = service.find_all().await.map_err(map_error)?;

    Ok(Json(coloquios))
}

/// GET /api/coloquios/{id}
pub async fn get_coloquio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let coloquio = service
        .find_one(id)
        .await
        .map_err(map_error)?
        .ok_or(AppError::NotFound)?;

    Ok(Json(coloquio))
}

/// DELETE /api/coloquios/{id}
pub async fn delete_coloquio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(id, "REST request to delete coloquio");
    let service = build_service(&state);
    service.delete(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, deletion_alert(ENTITY_NAME, id)))
}

/// GET /api/cursos/{id}/coloquios?desde=YYYY-MM-DD
///
/// Active colloquia of a course. With `desde`, only those on or after that
/// date; without it, every active one.
pub async fn get_coloquios_by_curso(
    State(state): State<AppState>,
    Path(curso_id): Path<i64>,
    Query(params): Query<ColoquioQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let coloquios = service
        .find_by_curso(curso_id, params.desde)
        .await
        .map_err(map_error)?;

    Ok(Json(coloquios))
}
