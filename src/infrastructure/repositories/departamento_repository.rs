//! Departamento Repository Implementation
//!
//! PostgreSQL implementation of the DepartamentoRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Departamento, DepartamentoData, DepartamentoRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct DepartamentoRow {
    id: i64,
    nombre: String,
    codigo: i32,
}

impl DepartamentoRow {
    fn into_departamento(self) -> Departamento {
        Departamento {
            id: self.id,
            nombre: self.nombre,
            codigo: self.codigo,
        }
    }
}

/// PostgreSQL departamento repository implementation.
#[derive(Clone)]
pub struct PgDepartamentoRepository {
    pool: PgPool,
}

impl PgDepartamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartamentoRepository for PgDepartamentoRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Departamento>, AppError> {
        let row = sqlx::query_as::<_, DepartamentoRow>(
            "SELECT id, nombre, codigo FROM departamento WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_departamento()))
    }

    async fn find_all(&self) -> Result<Vec<Departamento>, AppError> {
        let rows = sqlx::query_as::<_, DepartamentoRow>(
            "SELECT id, nombre, codigo FROM departamento ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_departamento()).collect())
    }

    async fn create(&self, data: &DepartamentoData) -> Result<Departamento, AppError> {
        let row = sqlx::query_as::<_, DepartamentoRow>(
            r#"
            INSERT INTO departamento (nombre, codigo)
            VALUES ($1, $2)
            RETURNING id, nombre, codigo
            "#,
        )
        .bind(&data.nombre)
        .bind(data.codigo)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_departamento())
    }

    async fn update(
        &self,
        id: i64,
        data: &DepartamentoData,
    ) -> Result<Option<Departamento>, AppError> {
        let row = sqlx::query_as::<_, DepartamentoRow>(
            r#"
            UPDATE departamento
            SET nombre = $2,
                codigo = $3
            WHERE id = $1
            RETURNING id, nombre, codigo
            "#,
        )
        .bind(id)
        .bind(&data.nombre)
        .bind(data.codigo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_departamento()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // Idempotent: deleting an absent id is still a success
        sqlx::query("DELETE FROM departamento WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
