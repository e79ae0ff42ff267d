//! Coloquio Service
//!
//! Colloquium management and the per-curso listing used by students to find
//! upcoming exam dates.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::application::dto::ColoquioPayload;
use crate::domain::{Coloquio, ColoquioEstado, ColoquioRepository, CursoRepository};

/// Coloquio service trait
#[async_trait]
pub trait ColoquioService: Send + Sync {
    /// Create a new colloquium. The payload must not carry an id.
    async fn create(&self, payload: ColoquioPayload) -> Result<Coloquio, ColoquioError>;

    /// Update an existing colloquium. The payload must carry an id.
    async fn update(&self, payload: ColoquioPayload) -> Result<Coloquio, ColoquioError>;

    async fn find_one(&self, id: i64) -> Result<Option<Coloquio>, ColoquioError>;

    async fn find_all(&self) -> Result<Vec<Coloquio>, ColoquioError>;

    /// Soft delete: mark the colloquium ELIMINADO. Idempotent.
    async fn delete(&self, id: i64) -> Result<(), ColoquioError>;

    /// Active colloquia of a course, ordered by fecha descending. With a
    /// `desde` threshold only colloquia on or after that date are returned.
    /// Fails when the curso id does not resolve.
    async fn find_by_curso(
        &self,
        curso_id: i64,
        desde: Option<NaiveDate>,
    ) -> Result<Vec<Coloquio>, ColoquioError>;
}

/// Coloquio service errors
#[derive(Debug, thiserror::Error)]
pub enum ColoquioError {
    #[error("A new coloquio cannot already have an id")]
    IdAlreadySet,

    #[error("An update requires an id")]
    IdMissing,

    #[error("Coloquio not found")]
    NotFound,

    #[error("No Curso exists with the provided id")]
    CursoInexistente,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ColoquioService implementation
pub struct ColoquioServiceImpl<C, K>
where
    C: ColoquioRepository,
    K: CursoRepository,
{
    coloquio_repo: Arc<C>,
    curso_repo: Arc<K>,
}

impl<C, K> ColoquioServiceImpl<C, K>
where
    C: ColoquioRepository,
    K: CursoRepository,
{
    pub fn new(coloquio_repo: Arc<C>, curso_repo: Arc<K>) -> Self {
        Self {
            coloquio_repo,
            curso_repo,
        }
    }
}

#[async_trait]
impl<C, K> ColoquioService for ColoquioServiceImpl<C, K>
where
    C: ColoquioRepository + 'static,
    K: CursoRepository + 'static,
{
    async fn create(&self, payload: ColoquioPayload) -> Result<Coloquio, ColoquioError> {
        if payload.id.is_some() {
            return Err(ColoquioError::IdAlreadySet);
        }

        // The referenced curso must exist before a coloquio can point at it
        let curso = self
            .curso_repo
            .find_by_id(payload.curso_id)
            .await
            .map_err(|e| ColoquioError::Internal(e.to_string()))?;
        if curso.is_none() {
            return Err(ColoquioError::CursoInexistente);
        }

        let data = payload.into_data();
        self.coloquio_repo
            .create(&data)
            .await
            .map_err(|e| ColoquioError::Internal(e.to_string()))
    }

    async fn update(&self, payload: ColoquioPayload) -> Result<Coloquio, ColoquioError> {
        let id = payload.id.ok_or(ColoquioError::IdMissing)?;

        let data = payload.into_data();
        self.coloquio_repo
            .update(id, &data)
            .await
            .map_err(|e| ColoquioError::Internal(e.to_string()))?
            .ok_or(ColoquioError::NotFound)
    }

    async fn find_one(&self, id: i64) -> Result<Option<Coloquio>, ColoquioError> {
        self.coloquio_repo
            .find_by_id(id)
            .await
            .map_err(|e| ColoquioError::Internal(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Coloquio>, ColoquioError> {
        self.coloquio_repo
            .find_all()
            .await
            .map_err(|e| ColoquioError::Internal(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<(), ColoquioError> {
        self.coloquio_repo
            .mark_eliminado(id)
            .await
            .map_err(|e| ColoquioError::Internal(e.to_string()))
    }

    async fn find_by_curso(
        &self,
        curso_id: i64,
        desde: Option<NaiveDate>,
    ) -> Result<Vec<Coloquio>, ColoquioError> {
        let curso = self
            .curso_repo
            .find_by_id(curso_id)
            .await
            .map_err(|e| ColoquioError::Internal(e.to_string()))?;
        if curso.is_none() {
            return Err(ColoquioError::CursoInexistente);
        }

        let result = match desde {
            Some(fecha) => {
                self.coloquio_repo
                    .find_by_curso_desde_fecha(curso_id, fecha, ColoquioEstado::Activo)
                    .await
            }
            None => {
                self.coloquio_repo
                    .find_by_curso_and_estado(curso_id, ColoquioEstado::Activo)
                    .await
            }
        };

        result.map_err(|e| ColoquioError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Curso, CursoEstado, MockColoquioRepository, MockCursoRepository};
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn sample_curso(id: i64) -> Curso {
        Curso {
            id,
            numero: 1,
            vacantes: 30,
            estado: CursoEstado::Activo,
            materia_id: 2,
        }
    }

    fn sample_coloquio(id: i64, curso_id: i64, fecha: NaiveDate) -> Coloquio {
        Coloquio {
            id,
            aula: "101".to_string(),
            fecha,
            hora_inicio: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            hora_fin: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            estado: ColoquioEstado::Activo,
            curso_id,
        }
    }

    #[tokio::test]
    async fn listing_for_unknown_curso_fails_instead_of_empty_success() {
        let mut curso_repo = MockCursoRepository::new();
        curso_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let mut coloquio_repo = MockColoquioRepository::new();
        coloquio_repo.expect_find_by_curso_and_estado().times(0);
        coloquio_repo.expect_find_by_curso_desde_fecha().times(0);

        let svc = ColoquioServiceImpl::new(Arc::new(coloquio_repo), Arc::new(curso_repo));

        let result = svc.find_by_curso(404, None).await;
        assert!(matches!(result, Err(ColoquioError::CursoInexistente)));
    }

    #[tokio::test]
    async fn listing_without_threshold_uses_estado_finder() {
        let mut curso_repo = MockCursoRepository::new();
        curso_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_curso(id))));

        let mut coloquio_repo = MockColoquioRepository::new();
        coloquio_repo
            .expect_find_by_curso_and_estado()
            .withf(|curso_id, estado| *curso_id == 4 && *estado == ColoquioEstado::Activo)
            .times(1)
            .returning(|curso_id, _| {
                Ok(vec![
                    sample_coloquio(2, curso_id, NaiveDate::from_ymd_opt(2024, 12, 9).unwrap()),
                    sample_coloquio(1, curso_id, NaiveDate::from_ymd_opt(2024, 12, 2).unwrap()),
                ])
            });

        let svc = ColoquioServiceImpl::new(Arc::new(coloquio_repo), Arc::new(curso_repo));

        let coloquios = svc.find_by_curso(4, None).await.unwrap();
        // Repository order (fecha desc) is passed through untouched
        assert_eq!(coloquios[0].fecha, NaiveDate::from_ymd_opt(2024, 12, 9).unwrap());
        assert_eq!(coloquios[1].fecha, NaiveDate::from_ymd_opt(2024, 12, 2).unwrap());
    }

    #[tokio::test]
    async fn listing_with_threshold_uses_date_finder() {
        let desde = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();

        let mut curso_repo = MockCursoRepository::new();
        curso_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_curso(id))));

        let mut coloquio_repo = MockColoquioRepository::new();
        coloquio_repo
            .expect_find_by_curso_desde_fecha()
            .withf(move |curso_id, fecha, estado| {
                *curso_id == 4 && *fecha == desde && *estado == ColoquioEstado::Activo
            })
            .times(1)
            .returning(|curso_id, fecha, _| Ok(vec![sample_coloquio(2, curso_id, fecha)]));

        let svc = ColoquioServiceImpl::new(Arc::new(coloquio_repo), Arc::new(curso_repo));

        let coloquios = svc.find_by_curso(4, Some(desde)).await.unwrap();
        assert_eq!(coloquios.len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_unknown_curso_reference() {
        let mut curso_repo = MockCursoRepository::new();
        curso_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let mut coloquio_repo = MockColoquioRepository::new();
        coloquio_repo.expect_create().times(0);

        let svc = ColoquioServiceImpl::new(Arc::new(coloquio_repo), Arc::new(curso_repo));

        let payload = ColoquioPayload {
            id: None,
            aula: "101".to_string(),
            fecha: NaiveDate::from_ymd_opt(2024, 12, 2).unwrap(),
            hora_inicio: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            hora_fin: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            estado: ColoquioEstado::Activo,
            curso_id: 404,
        };

        let result = svc.create(payload).await;
        assert!(matches!(result, Err(ColoquioError::CursoInexistente)));
    }

    #[tokio::test]
    async fn delete_marks_eliminado_and_is_idempotent() {
        let mut coloquio_repo = MockColoquioRepository::new();
        coloquio_repo
            .expect_mark_eliminado()
            .times(2)
            .returning(|_| Ok(()));

        let svc = ColoquioServiceImpl::new(
            Arc::new(coloquio_repo),
            Arc::new(MockCursoRepository::new()),
        );

        assert!(svc.delete(7).await.is_ok());
        assert!(svc.delete(7).await.is_ok());
    }
}
