//! Departamento entity and repository trait.
//!
//! Maps to the `departamento` table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// An academic department.
///
/// Maps to the `departamento` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - nombre: VARCHAR NOT NULL
/// - codigo: INTEGER NOT NULL
///
/// Materia rows belong to a department through `materia.departamento_id`;
/// the collection is always a derived lookup, never held in memory here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Departamento {
    /// Server-assigned identifier
    pub id: i64,

    /// Department name (required, non-empty)
    pub nombre: String,

    /// Numeric department code (required)
    pub codigo: i32,
}

/// Attribute set of a department without identity. Used for both inserts
/// and updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartamentoData {
    pub nombre: String,
    pub codigo: i32,
}

/// Repository trait for Departamento data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartamentoRepository: Send + Sync {
    /// Find a department by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Departamento>, AppError>;

    /// Find all departments.
    async fn find_all(&self) -> Result<Vec<Departamento>, AppError>;

    /// Insert a new department and return it with its assigned id.
    async fn create(&self, data: &DepartamentoData) -> Result<Departamento, AppError>;

    /// Update an existing department. Returns `None` when no row has the id.
    async fn update(&self, id: i64, data: &DepartamentoData)
        -> Result<Option<Departamento>, AppError>;

    /// Delete a department by id. Succeeds even when the id is unknown.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
