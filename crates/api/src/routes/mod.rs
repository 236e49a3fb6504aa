//! API routes

pub mod auth;
pub mod health;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Create all API routes
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the service sits behind a front-end proxy and the
    // original API accepted all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api/status", get(health::api_status))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/user/profile", get(users::profile))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
