//! Health and diagnostic endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::ApiState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Diagnostic status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: f64,
}

/// Liveness probe - is the service running?
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Verify the API is reachable
async fn test_api() -> Json<StatusResponse> {
    tracing::info!("API test endpoint accessed");
    Json(StatusResponse {
        status: "ok",
        message: "API is working correctly",
        timestamp: now_secs(),
    })
}

/// Verify the search provider is configured
async fn test_search(State(state): State<Arc<ApiState>>) -> Json<StatusResponse> {
    tracing::info!("search test endpoint accessed");

    let (status, message) = if state.search_configured {
        ("ok", "Tavily search API key found")
    } else {
        ("error", "Tavily search API key not configured")
    };

    Json(StatusResponse {
        status,
        message,
        timestamp: now_secs(),
    })
}

/// Current Unix time in seconds
#[allow(clippy::cast_precision_loss)]
fn now_secs() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Build health router (liveness only, no state needed)
pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

/// Build diagnostic router (needs state for the search check)
pub fn test_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/test", get(test_api))
        .route("/api/test/search", get(test_search))
        .with_state(state)
}
