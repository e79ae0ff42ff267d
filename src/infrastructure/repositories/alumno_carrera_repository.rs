//! AlumnoCarrera Repository Implementation
//!
//! Projects a student's degree programs through the join table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{AlumnoCarreraRepository, Carrera};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CarreraRow {
    id: i64,
    nombre: String,
    codigo: i32,
}

/// PostgreSQL alumno/carrera join repository implementation.
#[derive(Clone)]
pub struct PgAlumnoCarreraRepository {
    pool: PgPool,
}

impl PgAlumnoCarreraRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlumnoCarreraRepository for PgAlumnoCarreraRepository {
    async fn find_carreras_by_alumno(&self, alumno_id: i64) -> Result<Vec<Carrera>, AppError> {
        let rows = sqlx::query_as::<_, CarreraRow>(
            r#"
            SELECT c.id, c.nombre, c.codigo
            FROM carrera c
            JOIN alumno_carrera ac ON ac.carrera_id = c.id
            WHERE ac.alumno_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(alumno_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Carrera {
                id: r.id,
                nombre: r.nombre,
                codigo: r.codigo,
            })
            .collect())
    }
}
