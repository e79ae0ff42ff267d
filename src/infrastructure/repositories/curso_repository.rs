//! Curso Repository Implementation
//!
//! PostgreSQL implementation of the CursoRepository trait. The estado column
//! is stored as VARCHAR and mapped through `CursoEstado::from_str`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Curso, CursoData, CursoEstado, CursoRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CursoRow {
    id: i64,
    numero: i32,
    vacantes: i32,
    estado: String,
    materia_id: i64,
}

impl CursoRow {
    fn into_curso(self) -> Curso {
        Curso {
            id: self.id,
            numero: self.numero,
            vacantes: self.vacantes,
            estado: CursoEstado::from_str(&self.estado),
            materia_id: self.materia_id,
        }
    }
}

/// PostgreSQL curso repository implementation.
#[derive(Clone)]
pub struct PgCursoRepository {
    pool: PgPool,
}

impl PgCursoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CursoRepository for PgCursoRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Curso>, AppError> {
        let row = sqlx::query_as::<_, CursoRow>(
            "SELECT id, numero, vacantes, estado, materia_id FROM curso WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_curso()))
    }

    async fn find_all(&self) -> Result<Vec<Curso>, AppError> {
        let rows = sqlx::query_as::<_, CursoRow>(
            "SELECT id, numero, vacantes, estado, materia_id FROM curso ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_curso()).collect())
    }

    async fn create(&self, data: &CursoData) -> Result<Curso, AppError> {
        let row = sqlx::query_as::<_, CursoRow>(
            r#"
            INSERT INTO curso (numero, vacantes, estado, materia_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, numero, vacantes, estado, materia_id
            "#,
        )
        .bind(data.numero)
        .bind(data.vacantes)
        .bind(data.estado.as_str())
        .bind(data.materia_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_curso())
    }

    async fn update(&self, id: i64, data: &CursoData) -> Result<Option<Curso>, AppError> {
        let row = sqlx::query_as::<_, CursoRow>(
            r#"
            UPDATE curso
            SET numero = $2,
                vacantes = $3,
                estado = $4,
                materia_id = $5
            WHERE id = $1
            RETURNING id, numero, vacantes, estado, materia_id
            "#,
        )
        .bind(id)
        .bind(data.numero)
        .bind(data.vacantes)
        .bind(data.estado.as_str())
        .bind(data.materia_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_curso()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // Idempotent: deleting an absent id is still a success
        sqlx::query("DELETE FROM curso WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
