//! Authentication middleware
//!
//! Gates protected route groups: extracts the bearer token, verifies it via
//! the token service, and either attaches the caller's identity to request
//! extensions or rejects. Exactly one of {downstream call, 401, 500} happens
//! per request.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

/// Verified caller identity, inserted into request extensions by the gate
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Auth gate middleware
///
/// Apply to a router with `middleware::from_fn_with_state`. Any fault that
/// escapes as `ApiError::Internal` maps to a 500 response; token problems
/// never do, they are 401s.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().nth(1))
        .ok_or_else(|| ApiError::Unauthorized("Authorization token is required".to_string()))?;

    let claims = state
        .jwt()
        .verify(token)
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

    request.extensions_mut().insert(AuthUser {
        user_id: claims.id,
    });

    Ok(next.run(request).await)
}
