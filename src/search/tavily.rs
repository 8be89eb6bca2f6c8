//! Tavily search provider client

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{SearchBackend, SearchQuery, SearchResult};
use crate::{Error, Result};

/// Request timeout for the search provider
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Tavily search API client
///
/// Holds the key as loaded from configuration; a missing key surfaces as a
/// configuration error on first use, not at startup.
pub struct TavilyClient {
    client: reqwest::Client,
    api_key: Option<String>,
    max_results: usize,
}

/// Tavily API request body
#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    max_results: usize,
}

/// Tavily API response
#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
}

impl TavilyClient {
    /// Create a new Tavily client
    #[must_use]
    pub fn new(api_key: Option<String>, max_results: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            max_results,
        }
    }
}

#[async_trait]
impl SearchBackend for TavilyClient {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            Error::Config(
                "Tavily API key not configured. Please set the TAVILY_API_KEY environment variable."
                    .to_string(),
            )
        })?;

        let request = TavilyRequest {
            api_key,
            query: &query.text,
            search_depth: query.depth.as_str(),
            max_results: self.max_results,
        };

        tracing::debug!(query = %query.text, depth = query.depth.as_str(), "calling Tavily search API");

        let response = self
            .client
            .post("https://api.tavily.com/search")
            .json(&request)
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Tavily request failed");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Tavily API error");
            return Err(Error::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let result: TavilyResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse Tavily response");
            e
        })?;

        let results = result
            .results
            .into_iter()
            .map(|r| SearchResult {
                title: r.title,
                link: r.url,
                snippet: r.content,
                source: "Tavily".to_string(),
            })
            .collect();

        Ok(results)
    }
}
