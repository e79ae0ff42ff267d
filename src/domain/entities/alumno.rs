//! Alumno entity and repository trait.
//!
//! Maps to the `alumno` table. Each Alumno is associated 1:1 with a platform
//! user account through `user_id`; the account itself is externally managed
//! and only its id is stored here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A student.
///
/// Maps to the `alumno` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - nombre: VARCHAR NOT NULL
/// - apellido: VARCHAR NOT NULL
/// - padron: VARCHAR NOT NULL (student file number)
/// - prioridad: INTEGER NOT NULL (enrollment priority)
/// - user_id: BIGINT NOT NULL UNIQUE (platform account)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumno {
    pub id: i64,

    pub nombre: String,

    pub apellido: String,

    /// Student file number ("padrón")
    pub padron: String,

    /// Enrollment priority within the padrón ordering
    pub prioridad: i32,

    /// Platform user account this student belongs to
    pub user_id: i64,
}

/// Attribute set of a student without identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlumnoData {
    pub nombre: String,
    pub apellido: String,
    pub padron: String,
    pub prioridad: i32,
    pub user_id: i64,
}

/// Repository trait for Alumno data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlumnoRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Alumno>, AppError>;

    /// Resolve the student tied to a platform user account.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Alumno>, AppError>;

    async fn find_all(&self) -> Result<Vec<Alumno>, AppError>;

    async fn create(&self, data: &AlumnoData) -> Result<Alumno, AppError>;

    async fn update(&self, id: i64, data: &AlumnoData) -> Result<Option<Alumno>, AppError>;

    /// Delete a student by id. Succeeds even when the id is unknown.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alumno_serializes_user_id_camel_case() {
        let alumno = Alumno {
            id: 1,
            nombre: "Ada".to_string(),
            apellido: "Lovelace".to_string(),
            padron: "90001".to_string(),
            prioridad: 2,
            user_id: 77,
        };

        let json = serde_json::to_value(&alumno).unwrap();
        assert_eq!(json["userId"], 77);
        assert_eq!(json["padron"], "90001");
    }
}
