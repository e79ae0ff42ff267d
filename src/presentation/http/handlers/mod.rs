//! Request Handlers
//!
//! One module per REST resource. Handlers wire the PostgreSQL repositories
//! into the application services and translate service errors into HTTP
//! responses.

pub mod alumno;
pub mod carrera;
pub mod coloquio;
pub mod curso;
pub mod departamento;
pub mod health;
