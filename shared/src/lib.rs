//! Educa Shared Library
//!
//! This crate contains the API request/response types and input validation
//! shared between the backend and its integration tests.

pub mod types;
pub mod validation;

pub use types::*;
