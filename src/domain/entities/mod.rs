//! # Domain Entities
//!
//! Core entities of the academic model. Every entity maps directly to a
//! database table and carries a server-assigned `i64` id; "unsaved" values
//! exist only as `*Data` records without identity.
//!
//! ## Core Entities
//!
//! - **Departamento**: An academic department, owning Materia rows by FK
//! - **Materia**: A subject offered by a department
//! - **Curso**: A course offering of a subject
//! - **Coloquio**: An oral colloquium/exam event tied to a Curso
//! - **Alumno**: A student, linked 1:1 to a platform user account
//! - **Carrera**: A degree program
//!
//! ## Link Entities
//!
//! - **AlumnoCarrera**: N:M link between students and degree programs
//! - **Cursada**: A student's enrollment in a course offering
//! - **AdministradorDepartamento**: Grants a platform user administration of
//!   one department
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod administrador_departamento;
mod alumno;
mod alumno_carrera;
mod carrera;
mod coloquio;
mod curso;
mod cursada;
mod departamento;
mod materia;

pub use administrador_departamento::{
    AdministradorDepartamento, AdministradorDepartamentoRepository,
};
pub use alumno::{Alumno, AlumnoData, AlumnoRepository};
pub use alumno_carrera::{AlumnoCarrera, AlumnoCarreraRepository};
pub use carrera::{Carrera, CarreraRepository};
pub use coloquio::{Coloquio, ColoquioData, ColoquioEstado, ColoquioRepository};
pub use curso::{Curso, CursoData, CursoEstado, CursoRepository};
pub use cursada::{Cursada, CursadaEstado, CursadaRepository};
pub use departamento::{Departamento, DepartamentoData, DepartamentoRepository};
pub use materia::{Materia, MateriaRepository};

#[cfg(test)]
pub use administrador_departamento::MockAdministradorDepartamentoRepository;
#[cfg(test)]
pub use alumno::MockAlumnoRepository;
#[cfg(test)]
pub use alumno_carrera::MockAlumnoCarreraRepository;
#[cfg(test)]
pub use carrera::MockCarreraRepository;
#[cfg(test)]
pub use coloquio::MockColoquioRepository;
#[cfg(test)]
pub use curso::MockCursoRepository;
#[cfg(test)]
pub use cursada::MockCursadaRepository;
#[cfg(test)]
pub use departamento::MockDepartamentoRepository;
#[cfg(test)]
pub use materia::MockMateriaRepository;
