//! AdministradorDepartamento link entity and repository trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Grants a platform user administrative rights over one department.
///
/// The one-department-per-admin rule is enforced by lookup semantics: the
/// repository resolves at most one link per user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministradorDepartamento {
    pub id: i64,
    pub user_id: i64,
    pub departamento_id: i64,
}

/// Repository trait for the user/departamento administration link.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdministradorDepartamentoRepository: Send + Sync {
    /// Resolve the department administered by a platform user, if any.
    async fn find_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<AdministradorDepartamento>, AppError>;
}
