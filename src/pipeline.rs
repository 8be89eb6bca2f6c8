//! Chat pipeline: classify, search, assemble, complete
//!
//! A search failure during a flagged query degrades to "continue without
//! live context"; only the completion call can fail the request.

use crate::classifier;
use crate::completion::{ChatMessage, CompletionClient, Role};
use crate::prompt;
use crate::search::{SearchDepth, SearchGateway, SearchQuery, SearchResult};
use crate::Result;

/// Orchestrates a single chat turn against the external providers
#[derive(Clone)]
pub struct ChatPipeline {
    completion: CompletionClient,
    search: SearchGateway,
}

impl ChatPipeline {
    /// Create a pipeline over a completion client and a search gateway
    #[must_use]
    pub fn new(completion: CompletionClient, search: SearchGateway) -> Self {
        Self { completion, search }
    }

    /// Run the full turn: build the prompt, call the completion provider,
    /// return its raw response
    ///
    /// # Errors
    ///
    /// Returns error if the completion call fails or the completion API key
    /// is missing. Search failures never fail the turn.
    pub async fn respond(&self, history: &[ChatMessage]) -> Result<serde_json::Value> {
        let messages = self.build_messages(history).await;
        self.completion.complete(&messages).await
    }

    /// Build the provider-ready message list for a conversation history
    ///
    /// Runs the classifier on the latest user turn and, when it flags, the
    /// search gateway; a gateway failure logs a warning and the prompt is
    /// assembled without context.
    pub async fn build_messages(&self, history: &[ChatMessage]) -> Vec<ChatMessage> {
        let context = self.live_context(history).await;
        prompt::assemble(history, context.as_deref())
    }

    /// Fetch live search context for the latest user turn, if it needs any
    async fn live_context(&self, history: &[ChatMessage]) -> Option<Vec<SearchResult>> {
        let utterance = history
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())?;

        if !classifier::needs_live_data(utterance) {
            return None;
        }

        tracing::info!(utterance = %utterance, "detected real-time query");

        let query = SearchQuery {
            text: utterance.to_string(),
            depth: SearchDepth::Basic,
        };

        match self.search.search(&query).await {
            Ok(response) => Some(response.organic),
            Err(e) => {
                tracing::warn!(error = %e, "search unavailable, continuing without live context");
                None
            }
        }
    }
}
