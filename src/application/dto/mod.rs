//! Data Transfer Objects
//!
//! Request payloads and query parameters for the REST API.

pub mod request;

pub use request::*;
