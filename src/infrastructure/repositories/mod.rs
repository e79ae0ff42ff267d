//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits. Each
//! repository handles data access for a single entity type, mapping between
//! the database schema and the domain structs.

pub mod administrador_departamento_repository;
pub mod alumno_carrera_repository;
pub mod alumno_repository;
pub mod carrera_repository;
pub mod coloquio_repository;
pub mod curso_repository;
pub mod cursada_repository;
pub mod departamento_repository;
pub mod materia_repository;

pub use administrador_departamento_repository::PgAdministradorDepartamentoRepository;
pub use alumno_carrera_repository::PgAlumnoCarreraRepository;
pub use alumno_repository::PgAlumnoRepository;
pub use carrera_repository::PgCarreraRepository;
pub use coloquio_repository::PgColoquioRepository;
pub use curso_repository::PgCursoRepository;
pub use cursada_repository::PgCursadaRepository;
pub use departamento_repository::PgDepartamentoRepository;
pub use materia_repository::PgMateriaRepository;
