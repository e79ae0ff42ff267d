//! Carrera Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Carrera, CarreraRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CarreraRow {
    id: i64,
    nombre: String,
    codigo: i32,
}

impl CarreraRow {
    fn into_carrera(self) -> Carrera {
        Carrera {
            id: self.id,
            nombre: self.nombre,
            codigo: self.codigo,
        }
    }
}

/// PostgreSQL carrera repository implementation.
#[derive(Clone)]
pub struct PgCarreraRepository {
    pool: PgPool,
}

impl PgCarreraRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarreraRepository for PgCarreraRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Carrera>, AppError> {
        let row = sqlx::query_as::<_, CarreraRow>(
            "SELECT id, nombre, codigo FROM carrera WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_carrera()))
    }

    async fn find_all(&self) -> Result<Vec<Carrera>, AppError> {
        let rows = sqlx::query_as::<_, CarreraRow>(
            "SELECT id, nombre, codigo FROM carrera ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_carrera()).collect())
    }
}
