//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! Every CRUD service enforces the id-presence protocol here, away from the
//! HTTP plumbing: create rejects payloads that already carry an id, update
//! rejects payloads that lack one, and neither touches a repository when
//! rejecting.
//!
//! ## Available Services
//!
//! - **AlumnoService**: Students, plus the caller-scoped carrera/cursada views
//! - **CursoService**: Course offerings
//! - **ColoquioService**: Colloquia, including the per-curso listing
//! - **DepartamentoService**: Departments with role-filtered visibility
//! - **CarreraService**: Degree program reads

mod alumno_service;
mod carrera_service;
mod coloquio_service;
mod curso_service;
mod departamento_service;

pub use alumno_service::{AlumnoError, AlumnoService, AlumnoServiceImpl};
pub use carrera_service::{CarreraError, CarreraService, CarreraServiceImpl};
pub use coloquio_service::{ColoquioError, ColoquioService, ColoquioServiceImpl};
pub use curso_service::{CursoError, CursoService, CursoServiceImpl};
pub use departamento_service::{DepartamentoError, DepartamentoService, DepartamentoServiceImpl};
