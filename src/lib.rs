//! # Quechua Server
//!
//! A university course-management backend exposing a REST API over
//! PostgreSQL. It manages academic departments, subjects, course offerings,
//! colloquia, students, degree programs and enrollments.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, estado enums, repository traits and policies
//! - **Application Layer**: Services and request DTOs
//! - **Infrastructure Layer**: PostgreSQL repository implementations
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! quechua_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository traits, policies
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database pool and repositories
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, alerts, authorities)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
