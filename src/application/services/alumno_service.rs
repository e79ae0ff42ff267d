//! Alumno Service
//!
//! Student management plus the caller-scoped projections: the degree programs
//! and active enrollments of the student tied to the logged-in user.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::AlumnoPayload;
use crate::domain::{
    Alumno, AlumnoCarreraRepository, AlumnoRepository, Carrera, Cursada, CursadaEstado,
    CursadaRepository,
};

/// Alumno service trait
#[async_trait]
pub trait AlumnoService: Send + Sync {
    /// Create a new student. The payload must not carry an id.
    async fn create(&self, payload: AlumnoPayload) -> Result<Alumno, AlumnoError>;

    /// Update an existing student. The payload must carry an id.
    async fn update(&self, payload: AlumnoPayload) -> Result<Alumno, AlumnoError>;

    async fn find_one(&self, id: i64) -> Result<Option<Alumno>, AlumnoError>;

    async fn find_all(&self) -> Result<Vec<Alumno>, AlumnoError>;

    /// Delete by id. Succeeds whether or not the row existed.
    async fn delete(&self, id: i64) -> Result<(), AlumnoError>;

    /// Degree programs of the student tied to the given platform user.
    async fn find_carreras_del_alumno(&self, user_id: i64) -> Result<Vec<Carrera>, AlumnoError>;

    /// Active enrollments of the student tied to the given platform user.
    async fn find_cursadas_activas(&self, user_id: i64) -> Result<Vec<Cursada>, AlumnoError>;
}

/// Alumno service errors
#[derive(Debug, thiserror::Error)]
pub enum AlumnoError {
    #[error("A new alumno cannot already have an id")]
    IdAlreadySet,

    #[error("An update requires an id")]
    IdMissing,

    #[error("Alumno not found")]
    NotFound,

    #[error("No Alumno is associated with the logged-in user")]
    SinAlumno,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// AlumnoService implementation
pub struct AlumnoServiceImpl<A, AC, CU>
where
    A: AlumnoRepository,
    AC: AlumnoCarreraRepository,
    CU: CursadaRepository,
{
    alumno_repo: Arc<A>,
    alumno_carrera_repo: Arc<AC>,
    cursada_repo: Arc<CU>,
}

impl<A, AC, CU> AlumnoServiceImpl<A, AC, CU>
where
    A: AlumnoRepository,
    AC: AlumnoCarreraRepository,
    CU: CursadaRepository,
{
    pub fn new(alumno_repo: Arc<A>, alumno_carrera_repo: Arc<AC>, cursada_repo: Arc<CU>) -> Self {
        Self {
            alumno_repo,
            alumno_carrera_repo,
            cursada_repo,
        }
    }

    /// Resolve the student tied to a platform user or fail with `SinAlumno`.
    async fn require_alumno(&self, user_id: i64) -> Result<Alumno, AlumnoError> {
        self.alumno_repo
            .find_by_user_id(user_id)
            .await
            .map_err(|e| AlumnoError::Internal(e.to_string()))?
            .ok_or(AlumnoError::SinAlumno)
    }
}

#[async_trait]
impl<A, AC, CU> AlumnoService for AlumnoServiceImpl<A, AC, CU>
where
    A: AlumnoRepository + 'static,
    AC: AlumnoCarreraRepository + 'static,
    CU: CursadaRepository + 'static,
{
    async fn create(&self, payload: AlumnoPayload) -> Result<Alumno, AlumnoError> {
        if payload.id.is_some() {
            return Err(AlumnoError::IdAlreadySet);
        }

        let data = payload.into_data();
        self.alumno_repo
            .create(&data)
            .await
            .map_err(|e| AlumnoError::Internal(e.to_string()))
    }

    async fn update(&self, payload: AlumnoPayload) -> Result<Alumno, AlumnoError> {
        let id = payload.id.ok_or(AlumnoError::IdMissing)?;

        let data = payload.into_data();
        self.alumno_repo
            .update(id, &data)
            .await
            .map_err(|e| AlumnoError::Internal(e.to_string()))?
            .ok_or(AlumnoError::NotFound)
    }

    async fn find_one(&self, id: i64) -> Result<Option<Alumno>, AlumnoError> {
        self.alumno_repo
            .find_by_id(id)
            .await
            .map_err(|e| AlumnoError::Internal(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Alumno>, AlumnoError> {
        self.alumno_repo
            .find_all()
            .await
            .map_err(|e| AlumnoError::Internal(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<(), AlumnoError> {
        self.alumno_repo
            .delete(id)
            .await
            .map_err(|e| AlumnoError::Internal(e.to_string()))
    }

    async fn find_carreras_del_alumno(&self, user_id: i64) -> Result<Vec<Carrera>, AlumnoError> {
        let alumno = self.require_alumno(user_id).await?;

        self.alumno_carrera_repo
            .find_carreras_by_alumno(alumno.id)
            .await
            .map_err(|e| AlumnoError::Internal(e.to_string()))
    }

    async fn find_cursadas_activas(&self, user_id: i64) -> Result<Vec<Cursada>, AlumnoError> {
        let alumno = self.require_alumno(user_id).await?;

        self.cursada_repo
            .find_by_alumno_and_estado(alumno.id, CursadaEstado::Activa)
            .await
            .map_err(|e| AlumnoError::Internal(e.to_string()))
    }
}
