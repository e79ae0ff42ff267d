//! Carrera entity and repository trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A degree program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrera {
    pub id: i64,
    pub nombre: String,
    pub codigo: i32,
}

/// Repository trait for Carrera lookups.
///
/// Degree programs are reference data here; they are created out of band.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarreraRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Carrera>, AppError>;

    async fn find_all(&self) -> Result<Vec<Carrera>, AppError>;
}
