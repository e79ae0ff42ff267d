//! Departamento visibility policy.
//!
//! A department administrator only ever sees the single department linked to
//! them through AdministradorDepartamento; everyone else sees the full list.

use crate::shared::authorities;

/// Permitted subset of departments for a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartamentoVisibilidad {
    /// Caller may see every department.
    Todos,
    /// Caller may see exactly the department with this id.
    Solo(i64),
    /// Caller holds the admin role but has no department linked.
    Ninguno,
}

/// Decide which departments a caller may see.
///
/// `administered` is the department id linked to the caller via
/// AdministradorDepartamento, when such a link exists. It is only consulted
/// for callers holding [`authorities::ADM_DPTO`].
pub fn departamento_visibility(
    caller_authorities: &[String],
    administered: Option<i64>,
) -> DepartamentoVisibilidad {
    let is_adm_dpto = caller_authorities
        .iter()
        .any(|a| a == authorities::ADM_DPTO);

    if !is_adm_dpto {
        return DepartamentoVisibilidad::Todos;
    }

    match administered {
        Some(departamento_id) => DepartamentoVisibilidad::Solo(departamento_id),
        None => DepartamentoVisibilidad::Ninguno,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn regular_user_sees_everything() {
        let visibility = departamento_visibility(&roles(&["ROLE_USER"]), None);
        assert_eq!(visibility, DepartamentoVisibilidad::Todos);
    }

    #[test]
    fn admin_sees_everything_even_with_a_link() {
        // Only the department-admin role narrows the view
        let visibility = departamento_visibility(&roles(&["ROLE_ADMIN"]), Some(3));
        assert_eq!(visibility, DepartamentoVisibilidad::Todos);
    }

    #[test]
    fn department_admin_sees_only_their_department() {
        let visibility =
            departamento_visibility(&roles(&["ROLE_USER", "ROLE_ADM_DPTO"]), Some(5));
        assert_eq!(visibility, DepartamentoVisibilidad::Solo(5));
    }

    #[test]
    fn department_admin_without_link_sees_nothing() {
        let visibility = departamento_visibility(&roles(&["ROLE_ADM_DPTO"]), None);
        assert_eq!(visibility, DepartamentoVisibilidad::Ninguno);
    }

    #[test]
    fn no_authorities_sees_everything() {
        let visibility = departamento_visibility(&[], None);
        assert_eq!(visibility, DepartamentoVisibilidad::Todos);
    }
}
