//! Configuration management for the Aria gateway

pub mod file;

use std::path::PathBuf;

use crate::Result;

/// Default search result cache TTL in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Aria gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// API keys
    pub api_keys: ApiKeys,

    /// Chat completion provider configuration
    pub llm: LlmConfig,

    /// Search gateway configuration
    pub search: SearchConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Path to static files directory (web UI)
    pub static_dir: Option<PathBuf>,
}

/// API keys for external services
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    /// `OpenAI` API key (chat completions)
    pub openai: Option<String>,

    /// Tavily API key (web search)
    pub tavily: Option<String>,
}

/// Chat completion request parameters
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier
    pub model: String,

    /// Max tokens per completion
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling parameter
    pub top_p: f32,

    /// Frequency penalty
    pub frequency_penalty: f32,

    /// Presence penalty
    pub presence_penalty: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            top_p: 0.9,
            frequency_penalty: 0.0,
            presence_penalty: 0.6,
        }
    }
}

/// Search gateway configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Result cache TTL in seconds
    pub cache_ttl_secs: u64,

    /// Max results requested from the provider
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_results: 5,
        }
    }
}

impl Config {
    /// Load configuration with env > TOML file > default layering
    ///
    /// Missing API keys are not an error here: they surface as a 500 with
    /// remediation text on first use of the endpoint that needs them.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric environment variable fails to parse.
    pub fn load() -> Result<Self> {
        let fc = file::load_config_file();

        let api_keys = ApiKeys {
            openai: std::env::var("OPENAI_API_KEY").ok().or(fc.api_keys.openai),
            tavily: std::env::var("TAVILY_API_KEY").ok().or(fc.api_keys.tavily),
        };

        if api_keys.openai.is_none() {
            tracing::warn!("OPENAI_API_KEY not set, /api/chat will be unavailable");
        }
        if api_keys.tavily.is_none() {
            tracing::warn!("TAVILY_API_KEY not set, /api/search will be unavailable");
        }

        let llm_defaults = LlmConfig::default();
        let llm = LlmConfig {
            model: std::env::var("OPENAI_MODEL")
                .ok()
                .or(fc.llm.model)
                .unwrap_or(llm_defaults.model),
            max_tokens: parse_env("MAX_TOKENS")?
                .or(fc.llm.max_tokens)
                .unwrap_or(llm_defaults.max_tokens),
            temperature: parse_env("TEMPERATURE")?
                .or(fc.llm.temperature)
                .unwrap_or(llm_defaults.temperature),
            top_p: fc.llm.top_p.unwrap_or(llm_defaults.top_p),
            frequency_penalty: fc
                .llm
                .frequency_penalty
                .unwrap_or(llm_defaults.frequency_penalty),
            presence_penalty: fc
                .llm
                .presence_penalty
                .unwrap_or(llm_defaults.presence_penalty),
        };

        let search_defaults = SearchConfig::default();
        let search = SearchConfig {
            cache_ttl_secs: parse_env("SEARCH_CACHE_TTL_SECS")?
                .or(fc.search.cache_ttl_secs)
                .unwrap_or(search_defaults.cache_ttl_secs),
            max_results: fc
                .search
                .max_results
                .unwrap_or(search_defaults.max_results),
        };

        let server = ServerConfig {
            port: std::env::var("ARIA_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|s| s.parse().ok())
                .or(fc.server.port)
                .unwrap_or(8000),
            static_dir: std::env::var("ARIA_STATIC_DIR")
                .ok()
                .or(fc.server.static_dir)
                .map(PathBuf::from),
        };

        Ok(Self {
            server,
            api_keys,
            llm,
            search,
        })
    }
}

/// Parse an optional environment variable, erroring on malformed values
fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw.parse().map(Some).map_err(|_| {
            crate::Error::Config(format!("invalid value for {key}: {raw:?}"))
        }),
        Err(_) => Ok(None),
    }
}
