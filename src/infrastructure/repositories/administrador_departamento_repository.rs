//! AdministradorDepartamento Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{AdministradorDepartamento, AdministradorDepartamentoRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct AdministradorDepartamentoRow {
    id: i64,
    user_id: i64,
    departamento_id: i64,
}

/// PostgreSQL administrador/departamento link repository implementation.
#[derive(Clone)]
pub struct PgAdministradorDepartamentoRepository {
    pool: PgPool,
}

impl PgAdministradorDepartamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdministradorDepartamentoRepository for PgAdministradorDepartamentoRepository {
    async fn find_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<AdministradorDepartamento>, AppError> {
        let row = sqlx::query_as::<_, AdministradorDepartamentoRow>(
            r#"
            SELECT id, user_id, departamento_id
            FROM administrador_departamento
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| AdministradorDepartamento {
            id: r.id,
            user_id: r.user_id,
            departamento_id: r.departamento_id,
        }))
    }
}
