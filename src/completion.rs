//! Chat completion provider client
//!
//! Thin client for the OpenAI chat completions API. The provider response is
//! returned as raw JSON, untouched; the frontend reads
//! `choices[0].message.content` itself.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::{Error, Result};

/// Request timeout for the completion provider
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single conversation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Build a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Completion API request body
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

/// Chat completion client
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: Option<String>,
    config: LlmConfig,
}

impl CompletionClient {
    /// Create a new completion client
    ///
    /// A missing key surfaces as a configuration error on first use,
    /// not here.
    #[must_use]
    pub fn new(api_key: Option<String>, config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            config,
        }
    }

    /// Send the assembled messages to the provider and return its raw response
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if no API key is configured, `Error::Provider`
    /// with the upstream status and body on a non-2xx response, or
    /// `Error::Http` on transport failure. No retry.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<serde_json::Value> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            Error::Config(
                "OpenAI API key not configured. Please set the OPENAI_API_KEY environment variable."
                    .to_string(),
            )
        })?;

        let request = CompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            frequency_penalty: self.config.frequency_penalty,
            presence_penalty: self.config.presence_penalty,
        };

        tracing::debug!(
            model = %self.config.model,
            messages = messages.len(),
            "sending request to chat completion API"
        );

        let response = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&request)
            .timeout(COMPLETION_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "completion request failed");
                e
            })?;

        let status = response.status();
        tracing::debug!(status = %status, "completion API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "completion API error");
            return Err(Error::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let result: serde_json::Value = response.json().await?;

        if let Some(content) = result
            .pointer("/choices/0/message/content")
            .and_then(serde_json::Value::as_str)
        {
            let preview: String = content.chars().take(30).collect();
            tracing::info!(preview = %preview, "generated completion");
        }

        Ok(result)
    }
}
