//! AlumnoCarrera join entity and repository trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use super::Carrera;

/// Links a student to a degree program (N:M join row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumnoCarrera {
    pub id: i64,
    pub alumno_id: i64,
    pub carrera_id: i64,
}

/// Repository trait for the alumno/carrera join.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlumnoCarreraRepository: Send + Sync {
    /// Project the degree programs of a student through the join table.
    async fn find_carreras_by_alumno(&self, alumno_id: i64) -> Result<Vec<Carrera>, AppError>;
}
