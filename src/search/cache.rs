//! TTL cache for search results
//!
//! Keyed by the raw query string, exact match: no case folding or
//! whitespace normalization, so "Weather" and "weather" occupy distinct
//! entries. A known precision loss, kept for parity with the frontend
//! contract.

use std::sync::Arc;
use std::time::Duration;

use mini_moka::sync::Cache;

use super::SearchResult;

/// TTL-based cache for normalized search results
#[derive(Clone, Debug)]
pub struct SearchCache {
    inner: Cache<String, Arc<Vec<SearchResult>>>,
}

impl SearchCache {
    /// Create a cache whose entries expire after `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder().time_to_live(ttl).build(),
        }
    }

    /// Look up results for a query, exact-match on the raw string
    #[must_use]
    pub fn get(&self, query: &str) -> Option<Arc<Vec<SearchResult>>> {
        self.inner.get(&query.to_string())
    }

    /// Store results for a query
    pub fn insert(&self, query: String, results: Arc<Vec<SearchResult>>) {
        self.inner.insert(query, results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: format!("https://example.com/{title}"),
            snippet: "snippet".to_string(),
            source: "Tavily".to_string(),
        }
    }

    #[test]
    fn hit_within_ttl() {
        let cache = SearchCache::new(Duration::from_secs(300));
        cache.insert("weather in Paris".to_string(), Arc::new(vec![result("a")]));

        let hit = cache.get("weather in Paris").expect("entry present");
        assert_eq!(hit[0].title, "a");
    }

    #[test]
    fn keys_are_case_sensitive() {
        let cache = SearchCache::new(Duration::from_secs(300));
        cache.insert("Weather".to_string(), Arc::new(vec![result("a")]));

        assert!(cache.get("weather").is_none());
        assert!(cache.get("Weather").is_some());
    }

    #[test]
    fn entry_expires_after_ttl() {
        let cache = SearchCache::new(Duration::from_millis(50));
        cache.insert("q".to_string(), Arc::new(vec![result("a")]));

        std::thread::sleep(Duration::from_millis(150));
        assert!(cache.get("q").is_none());
    }
}
