//! Cursada entity and repository trait.
//!
//! Maps to the `cursada` table: a student's enrollment in a course offering.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Lifecycle state of an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CursadaEstado {
    #[default]
    Activa,
    Finalizada,
    Eliminada,
}

impl CursadaEstado {
    /// Convert from the database string representation.
    pub fn from_str(s: &str) -> Self {
        match s {
            "FINALIZADA" => Self::Finalizada,
            "ELIMINADA" => Self::Eliminada,
            _ => Self::Activa,
        }
    }

    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activa => "ACTIVA",
            Self::Finalizada => "FINALIZADA",
            Self::Eliminada => "ELIMINADA",
        }
    }
}

impl std::fmt::Display for CursadaEstado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A student's enrollment/course-taking record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursada {
    pub id: i64,
    pub alumno_id: i64,
    pub curso_id: i64,
    pub estado: CursadaEstado,
}

/// Repository trait for Cursada lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CursadaRepository: Send + Sync {
    /// Enrollments of a student filtered by estado.
    async fn find_by_alumno_and_estado(
        &self,
        alumno_id: i64,
        estado: CursadaEstado,
    ) -> Result<Vec<Cursada>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(CursadaEstado::Activa, "ACTIVA")]
    #[test_case(CursadaEstado::Finalizada, "FINALIZADA")]
    #[test_case(CursadaEstado::Eliminada, "ELIMINADA")]
    fn estado_db_representation(estado: CursadaEstado, s: &str) {
        assert_eq!(estado.as_str(), s);
        assert_eq!(CursadaEstado::from_str(s), estado);
    }

    #[test]
    fn estado_unknown_string_defaults_to_activa() {
        assert_eq!(CursadaEstado::from_str("???"), CursadaEstado::Activa);
    }
}
