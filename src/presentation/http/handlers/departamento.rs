//! Departamento Handlers
//!
//! Department CRUD with role-filtered listing: a caller holding only
//! ROLE_ADM_DPTO sees the single department they administer, everyone else
//! sees all of them. Also exposes the subjects of a department.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use validator::Validate;

use crate::application::dto::DepartamentoPayload;
use crate::application::services::{
    DepartamentoError, DepartamentoService, DepartamentoServiceImpl,
};
use crate::infrastructure::repositories::{
    PgAdministradorDepartamentoRepository, PgDepartamentoRepository, PgMateriaRepository,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::alert::{creation_alert, deletion_alert, update_alert};
use crate::shared::error::AppError;
use crate::startup::AppState;

const ENTITY_NAME: &str = "departamento";

fn build_service(
    state: &AppState,
) -> DepartamentoServiceImpl<
    PgDepartamentoRepository,
    PgAdministradorDepartamentoRepository,
    PgMateriaRepository,
> {
    DepartamentoServiceImpl::new(
        Arc::new(PgDepartamentoRepository::new(state.db.clone())),
        Arc::new(PgAdministradorDepartamentoRepository::new(state.db.clone())),
        Arc::new(PgMateriaRepository::new(state.db.clone())),
    )
}

fn map_error(error: DepartamentoError) -> AppError {
    match error {
        DepartamentoError::IdAlreadySet => AppError::bad_request_alert(
            ENTITY_NAME,
            "idexists",
            "A new departamento cannot already have an ID",
        ),
        DepartamentoError::IdMissing => {
            AppError::bad_request_alert(ENTITY_NAME, "idnull", "An update requires an ID")
        }
        DepartamentoError::NotFound => AppError::NotFound,
        DepartamentoError::Internal(message) => AppError::Internal(message),
    }
}

/// POST /api/departamentos
pub async fn create_departamento(
    State(state): State<AppState>,
    Json(payload): Json<DepartamentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?payload, "REST request to save departamento");
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = build_service(&state);
    let departamento = service.create(payload).await.map_err(map_error)?;

    let mut headers = creation_alert(ENTITY_NAME, departamento.id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/departamentos/{}", departamento.id))
    {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(departamento)))
}

/// PUT /api/departamentos
pub async fn update_departamento(
    State(state): State<AppState>,
    Json(payload): Json<DepartamentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(?payload, "REST request to update departamento");
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = build_service(&state);
    let departamento = service.update(payload).await.map_err(map_error)?;

    Ok((update_alert(ENTITY_NAME, departamento.id), Json(departamento)))
}

/// GET /api/departamentos
///
/// Listing scoped by the caller's authorities.
pub async fn get_all_departamentos(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let departamentos = service
        .find_all_for(auth.user_id, &auth.authorities)
        .await
        .map_err(map_error)?;

    Ok(Json(departamentos))
}

/// GET /api/departamentos/{id}
pub async fn get_departamento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let departamento = service
        .find_one(id)
        .await
        .map_err(map_error)?
        .ok_or(AppError::NotFound)?;

    Ok(Json(departamento))
}

/// DELETE /api/departamentos/{id}
pub async fn delete_departamento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(id, "REST request to delete departamento");
    let service = build_service(&state);
    service.delete(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, deletion_alert(ENTITY_NAME, id)))
}

/// GET /api/departamentos/{id}/materias
pub async fn get_materias_del_departamento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let materias = service.find_materias(id).await.map_err(map_error)?;

    Ok(Json(materias))
}
