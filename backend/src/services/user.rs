//! User service: registration and the login flow
//!
//! Login deliberately answers unknown email and wrong password with the same
//! 401 body, so a caller cannot probe which check failed. Password work runs
//! on the blocking thread pool.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use educa_shared::types::{LoginResponse, UserResponse};
use educa_shared::validation::{validate_email, validate_password};
use sqlx::PgPool;

/// Role assigned to users registered without an explicit one
const DEFAULT_ROLE: &str = "admin";

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        email: Option<&str>,
        password: Option<&str>,
        role: Option<&str>,
    ) -> Result<UserResponse, ApiError> {
        let (email, password) = match (email, password) {
            (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
            _ => {
                return Err(ApiError::Validation(
                    "Both email and password are required".to_string(),
                ))
            }
        };

        validate_email(email).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;

        if UserRepository::email_exists(pool, email)
            .await
            .map_err(|e| ApiError::service("Could not create user", e))?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(|e| ApiError::service("Could not create user", e))?;

        let user = UserRepository::create(pool, email, &password_hash, role.unwrap_or(DEFAULT_ROLE))
            .await
            .map_err(|e| ApiError::service("Could not create user", e))?;

        Ok(UserResponse {
            id: user.id,
            email: user.email,
            role: user.role,
        })
    }

    /// Login with email and password, producing a session token
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<LoginResponse, ApiError> {
        let (email, password) = match (email, password) {
            (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
            _ => {
                return Err(ApiError::Validation(
                    "Email and password are required".to_string(),
                ))
            }
        };

        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(|e| ApiError::service("Could not process login", e))?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(|e| ApiError::service("Could not process login", e))?;

        // Same message as the unknown-email branch above
        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = jwt_service
            .issue(user.id)
            .map_err(|e| ApiError::service("Could not process login", e))?;

        Ok(LoginResponse {
            user: UserResponse {
                id: user.id,
                email: user.email,
                role: user.role,
            },
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    // Database-backed coverage lives in backend/tests/user_integration_test.rs
}
