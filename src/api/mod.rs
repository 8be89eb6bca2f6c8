//! HTTP API server for the Aria gateway

pub mod chat;
pub mod health;
pub mod search;
pub mod voice;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::pipeline::ChatPipeline;
use crate::search::{SearchCache, SearchGateway, TavilyClient};
use crate::voice::{SpeechToText, TextToSpeech};
use crate::{Error, Result};

/// Shared state for API handlers
///
/// The chat pipeline and the standalone search endpoint hold clones of the
/// same gateway, so both paths share one result cache.
#[derive(Clone)]
pub struct ApiState {
    pub pipeline: ChatPipeline,
    pub search: SearchGateway,
    pub stt: SpeechToText,
    pub tts: TextToSpeech,
    /// Whether a search API key is configured (diagnostic endpoint)
    pub search_configured: bool,
}

impl ApiState {
    /// Build the shared state from configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let cache = SearchCache::new(Duration::from_secs(config.search.cache_ttl_secs));
        let backend = Arc::new(TavilyClient::new(
            config.api_keys.tavily.clone(),
            config.search.max_results,
        ));
        let gateway = SearchGateway::new(backend, cache);

        let completion =
            CompletionClient::new(config.api_keys.openai.clone(), config.llm.clone());
        let pipeline = ChatPipeline::new(completion, gateway.clone());

        Self {
            pipeline,
            search: gateway,
            stt: SpeechToText,
            tts: TextToSpeech,
            search_configured: config.api_keys.tavily.is_some(),
        }
    }
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
    static_dir: Option<std::path::PathBuf>,
}

impl ApiServer {
    /// Create a server from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            state: Arc::new(ApiState::from_config(config)),
            port: config.server.port,
            static_dir: config.server.static_dir.clone(),
        }
    }

    /// Build the router with all routes
    fn router(&self) -> Router {
        let mut router = Router::new()
            .merge(chat::router(self.state.clone()))
            .merge(search::router(self.state.clone()))
            .merge(voice::router(self.state.clone()))
            .merge(health::router())
            .merge(health::test_router(self.state.clone()));

        // Serve the frontend if configured
        if let Some(static_dir) = &self.static_dir {
            let index_file = static_dir.join("index.html");
            let serve_dir = ServeDir::new(static_dir).not_found_service(ServeFile::new(&index_file));

            router = router.fallback_service(serve_dir);
            tracing::info!(path = %static_dir.display(), "serving static files");
        }

        // CORS layer for cross-origin requests from the frontend
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        router.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if the server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(port = self.port, "API server listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }
}

/// API error rendered as `{"detail": "..."}` JSON
///
/// Provider errors keep their upstream status code; everything else is a 500.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Build a 400 error
    #[must_use]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Provider { status, body } => Self {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail: if body.is_empty() {
                    format!("provider error {status}")
                } else {
                    body
                },
            },
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorBody {
            detail: String,
        }

        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}
