//! Alumno Repository Implementation
//!
//! PostgreSQL implementation of the AlumnoRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Alumno, AlumnoData, AlumnoRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct AlumnoRow {
    id: i64,
    nombre: String,
    apellido: String,
    padron: String,
    prioridad: i32,
    user_id: i64,
}

impl AlumnoRow {
    fn into_alumno(self) -> Alumno {
        Alumno {
            id: self.id,
            nombre: self.nombre,
            apellido: self.apellido,
            padron: self.padron,
            prioridad: self.prioridad,
            user_id: self.user_id,
        }
    }
}

const COLUMNS: &str = "id, nombre, apellido, padron, prioridad, user_id";

/// PostgreSQL alumno repository implementation.
#[derive(Clone)]
pub struct PgAlumnoRepository {
    pool: PgPool,
}

impl PgAlumnoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlumnoRepository for PgAlumnoRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Alumno>, AppError> {
        let row = sqlx::query_as::<_, AlumnoRow>(&format!(
            "SELECT {COLUMNS} FROM alumno WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_alumno()))
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Alumno>, AppError> {
        let row = sqlx::query_as::<_, AlumnoRow>(&format!(
            "SELECT {COLUMNS} FROM alumno WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_alumno()))
    }

    async fn find_all(&self) -> Result<Vec<Alumno>, AppError> {
        let rows = sqlx::query_as::<_, AlumnoRow>(&format!(
            "SELECT {COLUMNS} FROM alumno ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_alumno()).collect())
    }

    async fn create(&self, data: &AlumnoData) -> Result<Alumno, AppError> {
        let row = sqlx::query_as::<_, AlumnoRow>(&format!(
            r#"
            INSERT INTO alumno (nombre, apellido, padron, prioridad, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&data.nombre)
        .bind(&data.apellido)
        .bind(&data.padron)
        .bind(data.prioridad)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_alumno())
    }

    async fn update(&self, id: i64, data: &AlumnoData) -> Result<Option<Alumno>, AppError> {
        let row = sqlx::query_as::<_, AlumnoRow>(&format!(
            r#"
            UPDATE alumno
            SET nombre = $2,
                apellido = $3,
                padron = $4,
                prioridad = $5,
                user_id = $6
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&data.nombre)
        .bind(&data.apellido)
        .bind(&data.padron)
        .bind(data.prioridad)
        .bind(data.user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_alumno()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // Idempotent: deleting an absent id is still a success
        sqlx::query("DELETE FROM alumno WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
