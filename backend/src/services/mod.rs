//! Business logic layer

mod student;
mod user;

pub use student::StudentService;
pub use user::UserService;

/// True when an error chain bottoms out in a Postgres unique violation
pub(crate) fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|db| db.is_unique_violation())
}
