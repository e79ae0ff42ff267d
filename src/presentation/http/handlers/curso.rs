//! Curso Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::application::dto::CursoPayload;
use crate::application::services::{CursoError, CursoService, CursoServiceImpl};
use crate::infrastructure::repositories::PgCursoRepository;
use crate::shared::alert::{creation_alert, deletion_alert, update_alert};
use crate::shared::error::AppError;
use crate::startup::AppState;

const ENTITY_NAME: &str = "curso";

fn build_service(state: &AppState) -> CursoServiceImpl<PgCursoRepository> {
    CursoServiceImpl::new(Arc::new(PgCursoRepository::new(state.db.clone())))
}

fn map_error(error: CursoError) -> AppError {
    match error {
        CursoError::IdAlreadySet => AppError::bad_request_alert(
            ENTITY_NAME,
            "idexists",
            "A new curso cannot already have an ID",
        ),
        CursoError::IdMissing => {
            AppError::bad_request_alert(ENTITY_NAME, "idnull", "An update requires an ID")
        }
        CursoError::NotFound => AppError::NotFound,
        CursoError::Internal(message) => AppError::Internal(message),
    }
}

/// POST /api/cursos
pub async fn create_curso(
    State(state): State<AppState>,
    Json(payload): Json<CursoPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?payload, "REST request to save curso");
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = build_service(&state);
    let curso = service.create(payload).await.map_err(map_error)?;

    let mut headers = creation_alert(ENTITY_NAME, curso.id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/cursos/{}", curso.id)) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(curso)))
}

/// PUT /api/cursos
pub async fn update_curso(
    State(state): State<AppState>,
    Json(payload): Json<CursoPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?payload, "REST request to update curso");
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = build_service(&state);
    let curso = service.update(payload).await.map_err(map_error)?;

    Ok((update_alert(ENTITY_NAME, curso.id), Json(curso)))
}

/// GET /api/cursos
pub async fn get_all_cursos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let cursos = service.find_all().await.map_err(map_error)?;

    Ok(Json(cursos))
}

/// GET /api/cursos/{id}
pub async fn get_curso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let curso = service
        .find_one(id)
        .await
        .map_err(map_error)?
        .ok_or(AppError::NotFound)?;

    Ok(Json(curso))
}

/// DELETE /api/cursos/{id}
pub async fn delete_curso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(id, "REST request to delete curso");
    let service = build_service(&state);
    service.delete(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, deletion_alert(ENTITY_NAME, id)))
}
