//! Curso Service
//!
//! Course offering management.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::CursoPayload;
use crate::domain::{Curso, CursoRepository};

/// Curso service trait
#[async_trait]
pub trait CursoService: Send + Sync {
    /// Create a new course offering. The payload must not carry an id.
    async fn create(&self, payload: CursoPayload) -> Result<Curso, CursoError>;

    /// Update an existing course offering. The payload must carry an id.
    async fn update(&self, payload: CursoPayload) -> Result<Curso, CursoError>;

    async fn find_one(&self, id: i64) -> Result<Option<Curso>, CursoError>;

    async fn find_all(&self) -> Result<Vec<Curso>, CursoError>;

    /// Delete by id. Succeeds whether or not the row existed.
    async fn delete(&self, id: i64) -> Result<(), CursoError>;
}

/// Curso service errors
#[derive(Debug, thiserror::Error)]
pub enum CursoError {
    #[error("A new curso cannot already have an id")]
    IdAlreadySet,

    #[error("An update requires an id")]
    IdMissing,

    #[error("Curso not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// CursoService implementation
pub struct CursoServiceImpl<R>
where
    R: CursoRepository,
{
    curso_repo: Arc<R>,
}

impl<R> CursoServiceImpl<R>
where
    R: CursoRepository,
{
    pub fn new(curso_repo: Arc<R>) -> Self {
        Self { curso_repo }
    }
}

#[async_trait]
impl<R> CursoService for CursoServiceImpl<R>
where
    R: CursoRepository + 'static,
{
    async fn create(&self, payload: CursoPayload) -> Result<Curso, CursoError> {
        if payload.id.is_some() {
            return Err(CursoError::IdAlreadySet);
        }

        let data = payload.into_data();
        self.curso_repo
            .create(&data)
            .await
            .map_err(|e| CursoError::Internal(e.to_string()))
    }

    async fn update(&self, payload: CursoPayload) -> Result<Curso, CursoError> {
        let id = payload.id.ok_or(CursoError::IdMissing)?;

        let data = payload.into_data();
        self.curso_repo
            .update(id, &data)
            .await
            .map_err(|e| CursoError::Internal(e.to_string()))?
            .ok_or(CursoError::NotFound)
    }

    async fn find_one(&self, id: i64) -> Result<Option<Curso>, CursoError> {
        self.curso_repo
            .find_by_id(id)
            .await
            .map_err(|e| CursoError::Internal(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Curso>, CursoError> {
        self.curso_repo
            .find_all()
            .await
            .map_err(|e| CursoError::Internal(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<(), CursoError> {
        self.curso_repo
            .delete(id)
            .await
            .map_err(|e| CursoError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CursoEstado, MockCursoRepository};
    use pretty_assertions::assert_eq;

    fn sample_payload(id: Option<i64>) -> CursoPayload {
        CursoPayload {
            id,
            numero: 2,
            vacantes: 60,
            estado: CursoEstado::Activo,
            materia_id: 12,
        }
    }

    #[tokio::test]
    async fn create_with_supplied_id_is_rejected() {
        let mut repo = MockCursoRepository::new();
        repo.expect_create().times(0);

        let svc = CursoServiceImpl::new(Arc::new(repo));
        let result = svc.create(sample_payload(Some(1))).await;

        assert!(matches!(result, Err(CursoError::IdAlreadySet)));
    }

    #[tokio::test]
    async fn create_then_read_preserves_fields() {
        let mut repo = MockCursoRepository::new();
        repo.expect_create().times(1).returning(|data| {
            Ok(Curso {
                id: 8,
                numero: data.numero,
                vacantes: data.vacantes,
                estado: data.estado,
                materia_id: data.materia_id,
            })
        });
        repo.expect_find_by_id()
            .withf(|id| *id == 8)
            .times(1)
            .returning(|id| {
                Ok(Some(Curso {
                    id,
                    numero: 2,
                    vacantes: 60,
                    estado: CursoEstado::Activo,
                    materia_id: 12,
                }))
            });

        let svc = CursoServiceImpl::new(Arc::new(repo));

        let created = svc.create(sample_payload(None)).await.unwrap();
        let read = svc.find_one(created.id).await.unwrap().unwrap();

        // Round-trip: equal in all fields including the assigned id
        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn update_without_id_is_rejected() {
        let mut repo = MockCursoRepository::new();
        repo.expect_update().times(0);

        let svc = CursoServiceImpl::new(Arc::new(repo));
        let result = svc.update(sample_payload(None)).await;

        assert!(matches!(result, Err(CursoError::IdMissing)));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let mut repo = MockCursoRepository::new();
        repo.expect_delete().times(2).returning(|_| Ok(()));

        let svc = CursoServiceImpl::new(Arc::new(repo));
        assert!(svc.delete(3).await.is_ok());
        assert!(svc.delete(3).await.is_ok());
    }
}
