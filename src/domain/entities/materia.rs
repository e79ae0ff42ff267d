//! Materia entity and repository trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A subject offered by a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Materia {
    pub id: i64,
    pub nombre: String,
    pub codigo: i32,
    pub departamento_id: i64,
}

/// Repository trait for Materia lookups.
///
/// Subjects are administered elsewhere; this service only reads them as the
/// derived collection of a department.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MateriaRepository: Send + Sync {
    /// Find all subjects belonging to a department.
    async fn find_by_departamento_id(&self, departamento_id: i64)
        -> Result<Vec<Materia>, AppError>;
}
