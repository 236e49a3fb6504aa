//! Health and status endpoints
//!
//! All static service metadata; no inputs and no failure modes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
}

/// Root banner - GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "ZakVibe Backend API is running".to_string(),
        status: "success".to_string(),
    })
}

/// Liveness check - GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "zakvibe-backend".to_string(),
    })
}

/// Service metadata - GET /api/status
pub async fn api_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
    })
}
