//! Data access layer
//!
//! Thin sqlx wrappers over the `users` and `students` tables.

mod student;
mod user;

pub use student::{NewStudent, StudentRecord, StudentRepository, UpdateStudent};
pub use user::{UserRecord, UserRepository};
