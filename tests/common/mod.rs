//! Shared test utilities

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use aria_gateway::api::ApiState;
use aria_gateway::config::LlmConfig;
use aria_gateway::voice::{SpeechToText, TextToSpeech};
use aria_gateway::{
    ChatPipeline, CompletionClient, Error, Result, SearchBackend, SearchCache, SearchGateway,
    SearchQuery, SearchResult,
};

/// Backend returning fixed results, recording every fetch
pub struct StaticBackend {
    results: Vec<SearchResult>,
    fetches: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

impl StaticBackend {
    pub fn new(results: Vec<SearchResult>) -> Arc<Self> {
        Arc::new(Self {
            results,
            fetches: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        })
    }

    /// Number of provider fetches that reached the backend
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Query text of the most recent fetch
    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchBackend for StaticBackend {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.text.clone());
        Ok(self.results.clone())
    }
}

/// Backend that always fails with a provider error
pub struct FailingBackend;

#[async_trait]
impl SearchBackend for FailingBackend {
    async fn fetch(&self, _query: &SearchQuery) -> Result<Vec<SearchResult>> {
        Err(Error::Provider {
            status: 500,
            body: "search provider unavailable".to_string(),
        })
    }
}

/// A couple of plausible normalized results
pub fn sample_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            title: "Paris weather today".to_string(),
            link: "https://example.com/paris".to_string(),
            snippet: "Sunny, 24C".to_string(),
            source: "Tavily".to_string(),
        },
        SearchResult {
            title: "Paris forecast".to_string(),
            link: "https://example.com/forecast".to_string(),
            snippet: "Clear skies all week".to_string(),
            source: "Tavily".to_string(),
        },
    ]
}

/// Gateway over an arbitrary backend with the given cache TTL
pub fn gateway_with(backend: Arc<dyn SearchBackend>, ttl: Duration) -> SearchGateway {
    SearchGateway::new(backend, SearchCache::new(ttl))
}

/// Pipeline whose completion client has no API key configured
///
/// Prompt building never touches the completion provider, and a chat call
/// fails fast with the missing-key configuration error.
pub fn pipeline_with(gateway: SearchGateway) -> ChatPipeline {
    ChatPipeline::new(CompletionClient::new(None, LlmConfig::default()), gateway)
}

/// Shared API state over an arbitrary search backend
pub fn test_state(backend: Arc<dyn SearchBackend>, search_configured: bool) -> Arc<ApiState> {
    let gateway = gateway_with(backend, Duration::from_secs(300));
    Arc::new(ApiState {
        pipeline: pipeline_with(gateway.clone()),
        search: gateway,
        stt: SpeechToText,
        tts: TextToSpeech,
        search_configured,
    })
}
