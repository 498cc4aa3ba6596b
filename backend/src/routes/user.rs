//! User routes: registration and login

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use educa_shared::types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /api/users/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::register(
        state.db(),
        req.email.as_deref(),
        req.password.as_deref(),
        req.role.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/users/login
///
/// Produces the session token the client must present on protected routes.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = UserService::login(
        state.db(),
        state.jwt(),
        req.email.as_deref(),
        req.password.as_deref(),
    )
    .await?;

    Ok(Json(response))
}
