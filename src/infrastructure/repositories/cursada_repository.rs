//! Cursada Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Cursada, CursadaEstado, CursadaRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CursadaRow {
    id: i64,
    alumno_id: i64,
    curso_id: i64,
    estado: String,
}

impl CursadaRow {
    fn into_cursada(self) -> Cursada {
        Cursada {
            id: self.id,
            alumno_id: self.alumno_id,
            curso_id: self.curso_id,
            estado: CursadaEstado::from_str(&self.estado),
        }
    }
}

/// PostgreSQL cursada repository implementation.
#[derive(Clone)]
pub struct PgCursadaRepository {
    pool: PgPool,
}

impl PgCursadaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CursadaRepository for PgCursadaRepository {
    async fn find_by_alumno_and_estado(
        &self,
        alumno_id: i64,
        estado: CursadaEstado,
    ) -> Result<Vec<Cursada>, AppError> {
        let rows = sqlx::query_as::<_, CursadaRow>(
            r#"
            SELECT id, alumno_id, curso_id, estado
            FROM cursada
            WHERE alumno_id = $1 AND estado = $2
            ORDER BY id
            "#,
        )
        .bind(alumno_id)
        .bind(estado.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_cursada()).collect())
    }
}
