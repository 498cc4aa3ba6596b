//! Route definitions for the Educa API
//!
//! Students live behind the auth gate; user registration/login and health
//! probes are public.

use crate::auth::auth_middleware;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod health;
mod student;
mod user;

#[cfg(test)]
mod auth_tests;

pub use student::student_routes;
pub use user::user_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes(state.clone()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest(
            "/students",
            student::student_routes()
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
        .nest("/users", user::user_routes())
}
