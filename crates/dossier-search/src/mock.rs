//! Mock search provider for deterministic testing

use crate::{RawHit, SearchError, SearchProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock search provider
///
/// Results are keyed by exact query string, with a default result list for
/// everything else. A per-call delay makes deadline behavior testable, and
/// received queries are recorded for order assertions.
///
/// # Examples
///
/// ```
/// use dossier_search::{MockSearchProvider, RawHit, SearchProvider};
///
/// # tokio_test::block_on(async {
/// let provider = MockSearchProvider::new().with_results(
///     "\"Apple\" official website",
///     vec![RawHit {
///         url: "https://www.apple.com".to_string(),
///         title: "Apple".to_string(),
///         snippet: "Apple Inc. official site".to_string(),
///     }],
/// );
///
/// let hits = provider.search("\"Apple\" official website", 10).await.unwrap();
/// assert_eq!(hits.len(), 1);
/// assert!(provider.search("anything else", 10).await.unwrap().is_empty());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSearchProvider {
    results: Arc<Mutex<HashMap<String, Vec<RawHit>>>>,
    default_results: Arc<Mutex<Vec<RawHit>>>,
    failures: Arc<Mutex<HashMap<String, String>>>,
    fail_all: Arc<Mutex<Option<String>>>,
    delay: Option<Duration>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearchProvider {
    /// Create an empty mock (every query yields no hits)
    pub fn new() -> Self {
        Self::default()
    }

    /// Script results for an exact query string
    pub fn with_results(self, query: impl Into<String>, hits: Vec<RawHit>) -> Self {
        self.results.lock().unwrap().insert(query.into(), hits);
        self
    }

    /// Script results for every query without a specific entry
    pub fn with_default_results(self, hits: Vec<RawHit>) -> Self {
        *self.default_results.lock().unwrap() = hits;
        self
    }

    /// Script a failure for an exact query string
    pub fn with_failure(self, query: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(query.into(), message.into());
        self
    }

    /// Fail every search with the given message
    pub fn with_all_failing(self, message: impl Into<String>) -> Self {
        *self.fail_all.lock().unwrap() = Some(message.into());
        self
    }

    /// Sleep this long inside every search call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queries received so far, in call order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Number of search calls made so far
    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl SearchProvider for MockSearchProvider {
    type Error = SearchError;

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawHit>, Self::Error> {
        self.queries.lock().unwrap().push(query.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = self.fail_all.lock().unwrap().clone() {
            return Err(SearchError::Backend(message));
        }

        if let Some(message) = self.failures.lock().unwrap().get(query) {
            return Err(SearchError::Backend(message.clone()));
        }

        let scripted = self.results.lock().unwrap().get(query).cloned();
        let hits = scripted.unwrap_or_else(|| self.default_results.lock().unwrap().clone());

        Ok(hits.into_iter().take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(url: &str) -> RawHit {
        RawHit {
            url: url.to_string(),
            title: "t".to_string(),
            snippet: "s".to_string(),
        }
    }

    #[tokio::test]
    async fn test_scripted_results() {
        let provider = MockSearchProvider::new().with_results("q1", vec![hit("https://a.com")]);

        let hits = provider.search("q1", 10).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(provider.search("q2", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_limit_applied() {
        let provider = MockSearchProvider::new()
            .with_results("q", vec![hit("https://a.com"), hit("https://b.com")]);

        let hits = provider.search("q", 1).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let provider = MockSearchProvider::new().with_failure("bad", "boom");
        assert!(provider.search("bad", 10).await.is_err());
        assert!(provider.search("good", 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_fail_all() {
        let provider = MockSearchProvider::new().with_all_failing("down");
        assert!(provider.search("anything", 10).await.is_err());
    }

    #[tokio::test]
    async fn test_queries_recorded() {
        let provider = MockSearchProvider::new();
        provider.search("first", 10).await.unwrap();
        provider.search("second", 10).await.unwrap();

        assert_eq!(provider.queries(), vec!["first", "second"]);
        assert_eq!(provider.call_count(), 2);
    }
}
