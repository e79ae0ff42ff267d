//! Coloquio Repository Implementation
//!
//! PostgreSQL implementation of the ColoquioRepository trait. Both
//! curso-scoped finders order by fecha descending; ties on fecha are left in
//! store order, matching the original query contract.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

use crate::domain::{Coloquio, ColoquioData, ColoquioEstado, ColoquioRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ColoquioRow {
    id: i64,
    aula: String,
    fecha: NaiveDate,
    hora_inicio: NaiveTime,
    hora_fin: NaiveTime,
    estado: String,
    curso_id: i64,
}

impl ColoquioRow {
    fn into_coloquio(self) -> Coloquio {
        Coloquio {
            id: self.id,
            aula: self.aula,
            fecha: self.fecha,
            hora_inicio: self.hora_inicio,
            hora_fin: self.hora_fin,
            estado: ColoquioEstado::from_str(&self.estado),
            curso_id: self.curso_id,
        }
    }
}

const COLUMNS: &str = "id, aula, fecha, hora_inicio, hora_fin, estado, curso_id";

/// PostgreSQL coloquio repository implementation.
#[derive(Clone)]
pub struct PgColoquioRepository {
    pool: PgPool,
}

impl PgColoquioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ColoquioRepository for PgColoquioRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Coloquio>, AppError> {
        let row = sqlx::query_as::<_, ColoquioRow>(&format!(
            "SELECT {COLUMNS} FROM coloquio WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_coloquio()))
    }

    async fn find_all(&self) -> Result<Vec<Coloquio>, AppError> {
        let rows = sqlx::query_as::<_, ColoquioRow>(&format!(
            "SELECT {COLUMNS} FROM coloquio ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_coloquio()).collect())
    }

    async fn find_by_curso_desde_fecha(
        &self,
        curso_id: i64,
        desde: NaiveDate,
        estado: ColoquioEstado,
    ) -> Result<Vec<Coloquio>, AppError> {
        let rows = sqlx::query_as::<_, ColoquioRow>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM coloquio
            WHERE curso_id = $1 AND fecha >= $2 AND estado = $3
            ORDER BY fecha DESC
            "#
        ))
        .bind(curso_id)
        .bind(desde)
        .bind(estado.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_coloquio()).collect())
    }

    async fn find_by_curso_and_estado(
        &self,
        curso_id: i64,
        estado: ColoquioEstado,
    ) -> Result<Vec<Coloquio>, AppError> {
        let rows = sqlx::query_as::<_, ColoquioRow>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM coloquio
            WHERE curso_id = $1 AND estado = $2
            ORDER BY fecha DESC
            "#
        ))
        .bind(curso_id)
        .bind(estado.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_coloquio()).collect())
    }

    async fn create(&self, data: &ColoquioData) -> Result<Coloquio, AppError> {
        let row = sqlx::query_as::<_, ColoquioRow>(&format!(
            r#"
            INSERT INTO coloquio (aula, fecha, hora_inicio, hora_fin, estado, curso_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&data.aula)
        .bind(data.fecha)
        .bind(data.hora_inicio)
        .bind(data.hora_fin)
        .bind(data.estado.as_str())
        .bind(data.curso_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_coloquio())
    }

    async fn update(&self, id: i64, data: &ColoquioData) -> Result<Option<Coloquio>, AppError> {
        let row = sqlx::query_as::<_, ColoquioRow>(&format!(
            r#"
            UPDATE coloquio
            SET aula = $2,
                fecha = $3,
                hora_inicio = $4,
                hora_fin = $5,
                estado = $6,
                curso_id = $7
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&data.aula)
        .bind(data.fecha)
        .bind(data.hora_inicio)
        .bind(data.hora_fin)
        .bind(data.estado.as_str())
        .bind(data.curso_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_coloquio()))
    }

    async fn mark_eliminado(&self, id: i64) -> Result<(), AppError> {
        // Soft delete; idempotent on absent or already-eliminated rows
        sqlx::query("UPDATE coloquio SET estado = $2 WHERE id = $1")
            .bind(id)
            .bind(ColoquioEstado::Eliminado.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
