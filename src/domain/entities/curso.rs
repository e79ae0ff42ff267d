//! Curso entity and repository trait.
//!
//! Maps to the `curso` table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Lifecycle state of a course offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CursoEstado {
    #[default]
    Activo,
    Eliminado,
}

impl CursoEstado {
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

impl std::fmt::Display for CursoEstado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A course offering of a subject.
///
/// A Curso must exist before any Coloquio can reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    pub id: i64,

    /// Offering number within the subject (e.g. "curso 2 de Álgebra II")
    pub numero: i32,

    /// Number of seats available
    pub vacantes: i32,

    pub estado: CursoEstado,

    /// Subject this offering belongs to
    pub materia_id: i64,
}

/// Attribute set of a course offering without identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursoData {
    pub numero: i32,
    pub vacantes: i32,
    pub estado: CursoEstado,
    pub materia_id: i64,
}

/// Repository trait for Curso data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CursoRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Curso>, AppError>;

    async fn find_all(&self) -> Result<Vec<Curso>, AppError>;

    async fn create(&self, data: &CursoData) -> Result<Curso, AppError>;

    async fn update(&self, id: i64, data: &CursoData) -> Result<Option<Curso>, AppError>;

    /// Delete a course offering by id. Succeeds even when the id is unknown.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_roundtrips_through_db_representation() {
        for estado in [CursoEstado::Activo, CursoEstado::Eliminado] {
            assert_eq!(CursoEstado::from_str(estado.as_str()), estado);
        }
    }

    #[test]
    fn estado_unknown_string_defaults_to_activo() {
        assert_eq!(CursoEstado::from_str(""), CursoEstado::Activo);
        assert_eq!(CursoEstado::from_str("whatever"), CursoEstado::Activo);
    }

    #[test]
    fn estado_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&CursoEstado::Eliminado).unwrap();
        assert_eq!(json, r#""ELIMINADO""#);
    }
}
