//! Alumno Handlers
//!
//! Student CRUD plus the two caller-scoped projections: the degree programs
//! and the active enrollments of the student linked to the logged-in user.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use validator::Validate;

use crate::application::dto::AlumnoPayload;
use crate::application::services::{AlumnoError, AlumnoService, AlumnoServiceImpl};
use crate::infrastructure::repositories::{
    PgAlumnoCarreraRepository, PgAlumnoRepository, PgCursadaRepository,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::alert::{creation_alert, deletion_alert, update_alert};
use crate::shared::error::AppError;
use crate::startup::AppState;

const ENTITY_NAME: &str = "alumno";

fn build_service(
    state: &AppState,
) -> AlumnoServiceImpl<PgAlumnoRepository, PgAlumnoCarreraRepository, PgCursadaRepository> {
    AlumnoServiceImpl::new(
        Arc::new(PgAlumnoRepository::new(state.db.clone())),
        Arc::new(PgAlumnoCarreraRepository::new(state.db.clone())),
        Arc::new(PgCursadaRepository::new(state.db.clone())),
    )
}

fn map_error(error: AlumnoError) -> AppError {
    match error {
        AlumnoError::IdAlreadySet => AppError::bad_request_alert(
            ENTITY_NAME,
            "idexists",
            "A new alumno cannot already have an ID",
        ),
        AlumnoError::IdMissing => {
            AppError::bad_request_alert(ENTITY_NAME, "idnull", "An update requires an ID")
        }
        AlumnoError::NotFound => AppError::NotFound,
        AlumnoError::SinAlumno => AppError::bad_request_alert(
            ENTITY_NAME,
            "idnoexists",
            "No existe un Alumno asociado al usuario logueado",
        ),
        AlumnoError::Internal(message) => AppError::Internal(message),
    }
}

/// POST /api/alumnos
pub async fn create_alumno(
    State(state): State<AppState>,
    Json(payload): Json<AlumnoPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?payload, "REST request to save alumno");
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = build_service(&state);
    let alumno = service.create(payload).await.map_err(map_error)?;

    let mut headers = creation_alert(ENTITY_NAME, alumno.id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/alumnos/{}", alumno.id)) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(alumno)))
}

/// PUT /api/alumnos
pub async fn update_alumno(
    State(state): State<AppState>,
    Json(payload): Json<AlumnoPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?payload, "REST request to update alumno");
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = build_service(&state);
    let alumno = service.update(payload).await.map_err(map_error)?;

    Ok((update_alert(ENTITY_NAME, alumno.id), Json(alumno)))
}

/// GET /api/alumnos
pub async fn get_all_alumnos(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let alumnos = service.find_all().await.map_err(map_error)?;

    Ok(Json(alumnos))
}

/// GET /api/alumnos/{id}
pub async fn get_alumno(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let alumno = service
        .find_one(id)
        .await
        .map_err(map_error)?
        .ok_or(AppError::NotFound)?;

    Ok(Json(alumno))
}

/// DELETE /api/alumnos/{id}
pub async fn delete_alumno(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(id, "REST request to delete alumno");
    let service = build_service(&state);
    service.delete(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, deletion_alert(ENTITY_NAME, id)))
}

/// GET /api/alumnos/carreras
///
/// Degree programs of the student linked to the authenticated caller.
pub async fn get_carreras_del_alumno(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let carreras = service
        .find_carreras_del_alumno(auth.user_id)
        .await
        .map_err(map_error)?;

    Ok(Json(carreras))
}

/// GET /api/alumnos/cursadasActivas
///
/// Active enrollments of the student linked to the authenticated caller.
pub async fn get_cursadas_activas(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let cursadas = service
        .find_cursadas_activas(auth.user_id)
        .await
        .map_err(map_error)?;

    Ok(Json(cursadas))
}
