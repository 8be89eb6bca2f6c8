//! Prompt assembly for the completion provider
//!
//! Merges the fixed persona instructions, optional search context, and the
//! supplied conversation history into one provider-ready message list. The
//! ordering is load-bearing for model behavior: persona first, search context
//! (when present) second, history unaltered after that.

use crate::completion::ChatMessage;
use crate::search::SearchResult;

/// Fixed persona and tone instructions, always the first message
pub const PERSONA_PROMPT: &str = "You are a helpful, friendly AI assistant integrated with a voice interface. \
     Always respond in English. Keep responses concise and conversational. \
     Be polite, engaging, and informative. Speak as if you're having a natural conversation.";

/// Max ranked results injected into the search context message
const MAX_CONTEXT_RESULTS: usize = 3;

/// Assemble the full message list for a completion call
///
/// Search results, when present and non-empty, become a second system
/// message between the persona message and the history.
#[must_use]
pub fn assemble(history: &[ChatMessage], results: Option<&[SearchResult]>) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(PERSONA_PROMPT)];

    if let Some(results) = results {
        if !results.is_empty() {
            messages.push(ChatMessage::system(format_search_context(results)));
        }
    }

    messages.extend_from_slice(history);
    messages
}

/// Render ranked results into the search context system message
fn format_search_context(results: &[SearchResult]) -> String {
    let mut context =
        String::from("I've searched for real-time information and found these results:\n\n");

    for (i, result) in results.iter().take(MAX_CONTEXT_RESULTS).enumerate() {
        context.push_str(&format!("{}. {}: {}\n", i + 1, result.title, result.snippet));
    }

    context.push_str(
        "\n\nUse this information to answer the user's question accurately and naturally. \
         Be specific when referring to any numeric data or factual information from the search results.",
    );

    context
}
