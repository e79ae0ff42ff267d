//! Departamento Service
//!
//! Department management with role-filtered visibility on the listing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::DepartamentoPayload;
use crate::domain::{
    departamento_visibility, AdministradorDepartamentoRepository, Departamento,
    DepartamentoRepository, DepartamentoVisibilidad, Materia, MateriaRepository,
};

/// Departamento service trait
#[async_trait]
pub trait DepartamentoService: Send + Sync {
    /// Create a new department. The payload must not carry an id.
    async fn create(&self, payload: DepartamentoPayload) -> Result<Departamento, DepartamentoError>;

    /// Update an existing department. The payload must carry an id.
    async fn update(&self, payload: DepartamentoPayload) -> Result<Departamento, DepartamentoError>;

    async fn find_one(&self, id: i64) -> Result<Option<Departamento>, DepartamentoError>;

    /// Departments visible to the caller: a department administrator sees at
    /// most the one linked to them, everyone else sees the full list.
    async fn find_all_for(
        &self,
        user_id: i64,
        caller_authorities: &[String],
    ) -> Result<Vec<Departamento>, DepartamentoError>;

    /// Delete by id. Succeeds whether or not the row existed. Dependent
    /// Materia rows are not checked.
    async fn delete(&self, id: i64) -> Result<(), DepartamentoError>;

    /// Subjects of a department (derived lookup through the FK).
    async fn find_materias(&self, departamento_id: i64) -> Result<Vec<Materia>, DepartamentoError>;
}

/// Departamento service errors
#[derive(Debug, thiserror::Error)]
pub enum DepartamentoError {
    #[error("A new departamento cannot already have an id")]
    IdAlreadySet,

    #[error("An update requires an id")]
    IdMissing,

    #[error("Departamento not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// DepartamentoService implementation
pub struct DepartamentoServiceImpl<D, A, M>
where
    D: DepartamentoRepository,
    A: AdministradorDepartamentoRepository,
    M: MateriaRepository,
{
    departamento_repo: Arc<D>,
    administrador_repo: Arc<A>,
    materia_repo: Arc<M>,
}

impl<D, A, M> DepartamentoServiceImpl<D, A, M>
where
    D: DepartamentoRepository,
    A: AdministradorDepartamentoRepository,
    M: MateriaRepository,
{
    pub fn new(
        departamento_repo: Arc<D>,
        administrador_repo: Arc<A>,
        materia_repo: Arc<M>,
    ) -> Self {
        Self {
            departamento_repo,
            administrador_repo,
            materia_repo,
        }
    }
}

#[async_trait]
impl<D, A, M> DepartamentoService for DepartamentoServiceImpl<D, A, M>
where
    D: DepartamentoRepository + 'static,
    A: AdministradorDepartamentoRepository + 'static,
    M: MateriaRepository + 'static,
{
    async fn create(
        &self,
        payload: DepartamentoPayload,
    ) -> Result<Departamento, DepartamentoError> {
        if payload.id.is_some() {
            return Err(DepartamentoError::IdAlreadySet);
        }

        let data = payload.into_data();
        self.departamento_repo
            .create(&data)
            .await
            .map_err(|e| DepartamentoError::Internal(e.to_string()))
    }

    async fn update(
        &self,
        payload: DepartamentoPayload,
    ) -> Result<Departamento, DepartamentoError> {
        let id = payload.id.ok_or(DepartamentoError::IdMissing)?;

        let data = payload.into_data();
        self.departamento_repo
            .update(id, &data)
            .await
            .map_err(|e| DepartamentoError::Internal(e.to_string()))?
            .ok_or(DepartamentoError::NotFound)
    }

    async fn find_one(&self, id: i64) -> Result<Option<Departamento>, DepartamentoError> {
        self.departamento_repo
            .find_by_id(id)
            .await
            .map_err(|e| DepartamentoError::Internal(e.to_string()))
    }

    async fn find_all_for(
        &self,
        user_id: i64,
        caller_authorities: &[String],
    ) -> Result<Vec<Departamento>, DepartamentoError> {
        let administered = self
            .administrador_repo
            .find_by_user_id(user_id)
            .await
            .map_err(|e| DepartamentoError::Internal(e.to_string()))?
            .map(|link| link.departamento_id);

        match departamento_visibility(caller_authorities, administered) {
            DepartamentoVisibilidad::Todos => self
                .departamento_repo
                .find_all()
                .await
                .map_err(|e| DepartamentoError::Internal(e.to_string())),
            DepartamentoVisibilidad::Solo(departamento_id) => {
                let departamento = self
                    .departamento_repo
                    .find_by_id(departamento_id)
                    .await
                    .map_err(|e| DepartamentoError::Internal(e.to_string()))?;
                Ok(departamento.into_iter().collect())
            }
            DepartamentoVisibilidad::Ninguno => Ok(Vec::new()),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DepartamentoError> {
        self.departamento_repo
            .delete(id)
            .await
            .map_err(|e| DepartamentoError::Internal(e.to_string()))
    }

    async fn find_materias(&self, departamento_id: i64) -> Result<Vec<Materia>, DepartamentoError> {
        let departamento = self
            .departamento_repo
            .find_by_id(departamento_id)
            .await
            .map_err(|e| DepartamentoError::Internal(e.to_string()))?;
        if departamento.is_none() {
            return Err(DepartamentoError::NotFound);
        }

        self.materia_repo
            .find_by_departamento_id(departamento_id)
            .await
            .map_err(|e| DepartamentoError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AdministradorDepartamento, MockAdministradorDepartamentoRepository,
        MockDepartamentoRepository, MockMateriaRepository,
    };
    use pretty_assertions::assert_eq;

    fn departamento(id: i64, nombre: &str) -> Departamento {
        Departamento {
            id,
            nombre: nombre.to_string(),
            codigo: id as i32,
        }
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn service(
        departamento_repo: MockDepartamentoRepository,
        administrador_repo: MockAdministradorDepartamentoRepository,
        materia_repo: MockMateriaRepository,
    ) -> DepartamentoServiceImpl<
        MockDepartamentoRepository,
        MockAdministradorDepartamentoRepository,
        MockMateriaRepository,
    > {
        DepartamentoServiceImpl::new(
            Arc::new(departamento_repo),
            Arc::new(administrador_repo),
            Arc::new(materia_repo),
        )
    }

    #[tokio::test]
    async fn regular_caller_sees_every_department() {
        let mut departamento_repo = MockDepartamentoRepository::new();
        departamento_repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                departamento(1, "Computación"),
                departamento(2, "Electrónica"),
            ])
        });

        let mut administrador_repo = MockAdministradorDepartamentoRepository::new();
        administrador_repo
            .expect_find_by_user_id()
            .times(1)
            .returning(|_| Ok(None));

        let svc = service(
            departamento_repo,
            administrador_repo,
            MockMateriaRepository::new(),
        );

        let result = svc.find_all_for(10, &roles(&["ROLE_USER"])).await.unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn department_admin_sees_only_the_linked_department() {
        let mut departamento_repo = MockDepartamentoRepository::new();
        departamento_repo.expect_find_all().times(0);
        departamento_repo
            .expect_find_by_id()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|id| Ok(Some(departamento(id, "Electrónica"))));

        let mut administrador_repo = MockAdministradorDepartamentoRepository::new();
        administrador_repo
            .expect_find_by_user_id()
            .withf(|user_id| *user_id == 10)
            .times(1)
            .returning(|user_id| {
                Ok(Some(AdministradorDepartamento {
                    id: 1,
                    user_id,
                    departamento_id: 2,
                }))
            });

        let svc = service(
            departamento_repo,
            administrador_repo,
            MockMateriaRepository::new(),
        );

        let result = svc
            .find_all_for(10, &roles(&["ROLE_ADM_DPTO"]))
            .await
            .unwrap();
        assert_eq!(result, vec![departamento(2, "Electrónica")]);
    }

    #[tokio::test]
    async fn department_admin_without_link_sees_empty_list() {
        let mut departamento_repo = MockDepartamentoRepository::new();
        departamento_repo.expect_find_all().times(0);
        departamento_repo.expect_find_by_id().times(0);

        let mut administrador_repo = MockAdministradorDepartamentoRepository::new();
        administrador_repo
            .expect_find_by_user_id()
            .times(1)
            .returning(|_| Ok(None));

        let svc = service(
            departamento_repo,
            administrador_repo,
            MockMateriaRepository::new(),
        );

        let result = svc
            .find_all_for(10, &roles(&["ROLE_ADM_DPTO"]))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn department_admin_with_dangling_link_sees_empty_list() {
        // The linked department was deleted; the listing stays well-behaved
        let mut departamento_repo = MockDepartamentoRepository::new();
        departamento_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let mut administrador_repo = MockAdministradorDepartamentoRepository::new();
        administrador_repo
            .expect_find_by_user_id()
            .times(1)
            .returning(|user_id| {
                Ok(Some(AdministradorDepartamento {
                    id: 1,
                    user_id,
                    departamento_id: 99,
                }))
            });

        let svc = service(
            departamento_repo,
            administrador_repo,
            MockMateriaRepository::new(),
        );

        let result = svc
            .find_all_for(10, &roles(&["ROLE_ADM_DPTO"]))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn create_with_supplied_id_is_rejected() {
        let mut departamento_repo = MockDepartamentoRepository::new();
        departamento_repo.expect_create().times(0);

        let svc = service(
            departamento_repo,
            MockAdministradorDepartamentoRepository::new(),
            MockMateriaRepository::new(),
        );

        let payload = DepartamentoPayload {
            id: Some(1),
            nombre: "Computación".to_string(),
            codigo: 75,
        };
        assert!(matches!(
            svc.create(payload).await,
            Err(DepartamentoError::IdAlreadySet)
        ));
    }

    #[tokio::test]
    async fn materias_of_unknown_department_is_not_found() {
        let mut departamento_repo = MockDepartamentoRepository::new();
        departamento_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let mut materia_repo = MockMateriaRepository::new();
        materia_repo.expect_find_by_departamento_id().times(0);

        let svc = service(
            departamento_repo,
            MockAdministradorDepartamentoRepository::new(),
            materia_repo,
        );

        assert!(matches!(
            svc.find_materias(404).await,
            Err(DepartamentoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn materias_are_a_derived_lookup() {
        let mut departamento_repo = MockDepartamentoRepository::new();
        departamento_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(departamento(id, "Computación"))));

        let mut materia_repo = MockMateriaRepository::new();
        materia_repo
            .expect_find_by_departamento_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|departamento_id| {
                Ok(vec![Materia {
                    id: 12,
                    nombre: "Algoritmos y Programación I".to_string(),
                    codigo: 7540,
                    departamento_id,
                }])
            });

        let svc = service(
            departamento_repo,
            MockAdministradorDepartamentoRepository::new(),
            materia_repo,
        );

        let materias = svc.find_materias(1).await.unwrap();
        assert_eq!(materias.len(), 1);
        assert_eq!(materias[0].departamento_id, 1);
    }
}
