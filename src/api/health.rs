//! Health check and service index endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use super::ApiState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(rename = "modelConfigured")]
    pub model_configured: bool,
    pub model: String,
    pub timestamp: String,
}

/// Liveness probe with upstream configuration summary
async fn health(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_configured: state.model_info.configured,
        model: state.model_info.model.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Service index response
#[derive(Serialize)]
struct IndexResponse {
    message: &'static str,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    health: &'static str,
    command: &'static str,
}

/// Describe the service and its endpoints
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "VoiceTask command relay",
        endpoints: Endpoints {
            health: "GET /health",
            command: "POST /api/command",
        },
    })
}

/// Build health router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .with_state(state)
}
