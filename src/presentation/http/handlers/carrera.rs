//! Carrera Handlers
//!
//! Degree programs are reference data; only reads are exposed.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::application::services::{CarreraError, CarreraService, CarreraServiceImpl};
use crate::infrastructure::repositories::PgCarreraRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn build_service(state: &AppState) -> CarreraServiceImpl<PgCarreraRepository> {
    CarreraServiceImpl::new(Arc::new(PgCarreraRepository::new(state.db.clone())))
}

fn map_error(error: CarreraError) -> AppError {
    match error {
        CarreraError::Internal(message) => AppError::Internal(message),
    }
}

/// GET /api/carreras
pub async fn get_all_carreras(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let carreras = service.find_all().await.map_err(map_error)?;

    Ok(Json(carreras))
}

/// GET /api/carreras/{id}
pub async fn get_carrera(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = build_service(&state);
    let carrera = service
        .find_one(id)
        .await
        .map_err(map_error)?
        .ok_or(AppError::NotFound)?;

    Ok(Json(carrera))
}
