//! Authority constants for role membership checks.
//!
//! Authority strings travel in the `auth` claim of the platform-issued JWT.

/// Platform administrator.
pub const ADMIN: &str = "ROLE_ADMIN";

/// Regular authenticated user.
pub const USER: &str = "ROLE_USER";

/// Department administrator. A user holding this role administers exactly
/// one Departamento, linked through AdministradorDepartamento.
pub const ADM_DPTO: &str = "ROLE_ADM_DPTO";

/// Student role, linked to an Alumno record by user id.
pub const ALUMNO: &str = "ROLE_ALUMNO";
