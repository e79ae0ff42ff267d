//! Coloquio entity and repository trait.
//!
//! Maps to the `coloquio` table. Coloquios are never hard-deleted: removal
//! marks the row ELIMINADO so historic exam records survive.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Lifecycle state of a colloquium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColoquioEstado {
    #[default]
    Activo,
    Eliminado,
}

impl ColoquioEstado {
    /// Convert from the database string representation.
    pub fn from_str(s: &str) -> Self {
        match s {
            "ELIMINADO" => Self::Eliminado,
            _ => Self::Activo,
        }
    }

    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activo => "ACTIVO",
            Self::Eliminado => "ELIMINADO",
        }
    }
}

impl std::fmt::Display for ColoquioEstado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An oral colloquium/exam event tied to a course offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coloquio {
    pub id: i64,

    /// Room where the colloquium takes place
    pub aula: String,

    pub fecha: NaiveDate,

    pub hora_inicio: NaiveTime,

    pub hora_fin: NaiveTime,

    pub estado: ColoquioEstado,

    /// Course offering this colloquium belongs to
    pub curso_id: i64,
}

/// Attribute set of a colloquium without identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoquioData {
    pub aula: String,
    pub fecha: NaiveDate,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    pub estado: ColoquioEstado,
    pub curso_id: i64,
}

/// Repository trait for Coloquio data access operations.
///
/// The two curso-scoped finders reproduce the original query surface: both
/// order by fecha descending and leave date ties in store order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ColoquioRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Coloquio>, AppError>;

    async fn find_all(&self) -> Result<Vec<Coloquio>, AppError>;

    /// Colloquia of a course with `fecha >= desde` and the given estado,
    /// ordered by fecha descending.
    async fn find_by_curso_desde_fecha(
        &self,
        curso_id: i64,
        desde: NaiveDate,
        estado: ColoquioEstado,
    ) -> Result<Vec<Coloquio>, AppError>;

    /// All colloquia of a course with the given estado, ordered by fecha
    /// descending.
    async fn find_by_curso_and_estado(
        &self,
        curso_id: i64,
        estado: ColoquioEstado,
    ) -> Result<Vec<Coloquio>, AppError>;

    async fn create(&self, data: &ColoquioData) -> Result<Coloquio, AppError>;

    async fn update(&self, id: i64, data: &ColoquioData) -> Result<Option<Coloquio>, AppError>;

    /// Soft delete: mark the colloquium ELIMINADO. Succeeds even when the id
    /// is unknown.
    async fn mark_eliminado(&self, id: i64) -> Result<(), AppError>;
}
