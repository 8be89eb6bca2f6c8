//! Search endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use super::{ApiError, ApiState};
use crate::search::{SearchDepth, SearchQuery, SearchResponse};

/// Build search router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/search", post(search))
        .with_state(state)
}

/// Search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub search_depth: SearchDepth,
}

/// Execute a search and return the normalized results
async fn search(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let preview: String = request.query.chars().take(30).collect();
    tracing::info!(query = %preview, "search request received");

    let query = SearchQuery {
        text: request.query,
        depth: request.search_depth,
    };

    let response = state.search.search(&query).await?;
    Ok(Json(response))
}
