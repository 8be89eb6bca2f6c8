//! Web search gateway with a TTL result cache
//!
//! Normalizes provider results into a stable shape for the frontend and for
//! prompt context injection. Results for identical query strings are served
//! from the cache within the TTL window; a miss goes to the provider and the
//! fresh results are cached. No retry on provider failure; the error
//! propagates and the caller decides whether to degrade.

mod cache;
mod tavily;

pub use cache::SearchCache;
pub use tavily::TavilyClient;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Search depth requested from the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

impl SearchDepth {
    /// Wire value used by the provider API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }
}

/// A search request
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Raw query text, also the cache key
    pub text: String,
    /// Provider search depth
    pub depth: SearchDepth,
}

/// A single normalized search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: String,
}

/// Normalized response returned to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub organic: Vec<SearchResult>,
    pub query: String,
    #[serde(rename = "searchDepth")]
    pub search_depth: SearchDepth,
}

/// A search provider the gateway can fetch from
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute the query against the provider and normalize the results
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<SearchResult>>;
}

/// Search gateway: provider access fronted by the TTL cache
#[derive(Clone)]
pub struct SearchGateway {
    backend: Arc<dyn SearchBackend>,
    cache: SearchCache,
}

impl SearchGateway {
    /// Create a gateway over a provider backend
    #[must_use]
    pub fn new(backend: Arc<dyn SearchBackend>, cache: SearchCache) -> Self {
        Self { backend, cache }
    }

    /// Run a search, serving from the cache when a fresh entry exists
    ///
    /// # Errors
    ///
    /// Returns error if the provider call fails or the API key is missing.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let organic = if let Some(cached) = self.cache.get(&query.text) {
            tracing::info!(query = %query.text, "serving cached search results");
            cached.as_ref().clone()
        } else {
            let results = self.backend.fetch(query).await?;
            tracing::info!(query = %query.text, count = results.len(), "search successful");
            self.cache
                .insert(query.text.clone(), Arc::new(results.clone()));
            results
        };

        Ok(SearchResponse {
            organic,
            query: query.text.clone(),
            search_depth: query.depth,
        })
    }
}
