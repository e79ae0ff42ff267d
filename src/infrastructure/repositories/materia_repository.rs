//! Materia Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Materia, MateriaRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct MateriaRow {
    id: i64,
    nombre: String,
    codigo: i32,
    departamento_id: i64,
}

impl MateriaRow {
    fn into_materia(self) -> Materia {
        Materia {
            id: self.id,
            nombre: self.nombre,
            codigo: self.codigo,
            departamento_id: self.departamento_id,
        }
    }
}

/// PostgreSQL materia repository implementation.
#[derive(Clone)]
pub struct PgMateriaRepository {
    pool: PgPool,
}

impl PgMateriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MateriaRepository for PgMateriaRepository {
    async fn find_by_departamento_id(
        &self,
        departamento_id: i64,
    ) -> Result<Vec<Materia>, AppError> {
        let rows = sqlx::query_as::<_, MateriaRow>(
            r#"
            SELECT id, nombre, codigo, departamento_id
            FROM materia
            WHERE departamento_id = $1
            ORDER BY codigo
            "#,
        )
        .bind(departamento_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_materia()).collect())
    }
}
