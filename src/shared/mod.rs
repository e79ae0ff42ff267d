//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod alert;
pub mod authorities;
pub mod error;
