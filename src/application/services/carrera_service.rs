//! Carrera Service
//!
//! Read-only access to degree programs.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Carrera, CarreraRepository};

/// Carrera service trait
#[async_trait]
pub trait CarreraService: Send + Sync {
    async fn find_one(&self, id: i64) -> Result<Option<Carrera>, CarreraError>;

    async fn find_all(&self) -> Result<Vec<Carrera>, CarreraError>;
}

/// Carrera service errors
#[derive(Debug, thiserror::Error)]
pub enum CarreraError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// CarreraService implementation
pub struct CarreraServiceImpl<R>
where
    R: CarreraRepository,
{
    carrera_repo: Arc<R>,
}

impl<R> CarreraServiceImpl<R>
where
    R: CarreraRepository,
{
    pub fn new(carrera_repo: Arc<R>) -> Self {
        Self { carrera_repo }
    }
}

#[async_trait]
impl<R> CarreraService for CarreraServiceImpl<R>
where
    R: CarreraRepository + 'static,
{
    async fn find_one(&self, id: i64) -> Result<Option<Carrera>, CarreraError> {
        self.carrera_repo
            .find_by_id(id)
            .await
            .map_err(|e| CarreraError::Internal(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Carrera>, CarreraError> {
        self.carrera_repo
            .find_all()
            .await
            .map_err(|e| CarreraError::Internal(e.to_string()))
    }
}
