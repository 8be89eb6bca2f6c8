//! Aria Gateway - Voice assistant backend gateway
//!
//! This library provides the backend for a browser-based voice assistant:
//! - Chat completion via an external LLM provider, with real-time web-search
//!   context injection for queries about current-world state
//! - Web search with a TTL result cache
//! - Speech-to-text and text-to-speech endpoints (stub payloads until real
//!   providers are wired in)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 Browser frontend                  │
//! │    audio capture │ chat UI │ audio playback       │
//! └───────────────────────┬──────────────────────────┘
//!                         │
//! ┌───────────────────────▼──────────────────────────┐
//! │                  Aria Gateway                     │
//! │  classifier → search gateway → prompt → complete  │
//! └───────────────────────┬──────────────────────────┘
//!                         │
//! ┌───────────────────────▼──────────────────────────┐
//! │              External providers                   │
//! │    chat completion API  │  web search API          │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod classifier;
pub mod completion;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod search;
pub mod voice;

pub use completion::{ChatMessage, CompletionClient, Role};
pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::ChatPipeline;
pub use search::{
    SearchBackend, SearchCache, SearchDepth, SearchGateway, SearchQuery, SearchResponse,
    SearchResult, TavilyClient,
};
