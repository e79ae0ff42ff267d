//! Authorization policies.
//!
//! Pure functions mapping (caller identity, resource links) to a permitted
//! subset, kept free of HTTP and database plumbing so they can be tested in
//! isolation.

mod departamento_policy;

pub use departamento_policy::{departamento_visibility, DepartamentoVisibilidad};
