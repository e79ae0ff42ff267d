//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Database repositories (PostgreSQL)
//! - Connection pool management

pub mod database;
pub mod repositories;
