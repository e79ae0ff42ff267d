//! # Domain Layer
//!
//! The domain layer contains the core business model of the course-management
//! backend. It is independent of any external frameworks or infrastructure
//! concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Departamento, Curso, Alumno, etc.)
//! - **policies**: Pure authorization policies
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Relations are foreign keys with derived lookups, never in-memory
//!   collections maintained on both sides

pub mod entities;
pub mod policies;

// Re-export commonly used types
pub use entities::*;
pub use policies::*;
