//! Serper.dev search provider
//!
//! Serper fronts Google search with a JSON API: one POST per query, hits
//! under an `organic` key. Rows missing a link are dropped at the boundary.

use crate::{RawHit, SearchError, SearchProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Serper API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/search";

/// Default timeout for a single search request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Serper.dev backed search provider
pub struct SerperProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: usize,
    gl: &'static str,
    hl: &'static str,
}

#[derive(Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperOrganic>,
}

#[derive(Deserialize)]
struct SerperOrganic {
    #[serde(default)]
    link: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

impl SerperProvider {
    /// Create a provider with the given API key
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| SearchError::Backend(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Override the endpoint (testing against a local stub)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl SearchProvider for SerperProvider {
    type Error = SearchError;

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawHit>, Self::Error> {
        let request_body = SerperRequest {
            q: query,
            num: limit,
            gl: "us",
            hl: "en",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SearchError::Backend(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Backend(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: SerperResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(format!("Failed to parse: {}", e)))?;

        Ok(body
            .organic
            .into_iter()
            .filter(|row| !row.link.is_empty())
            .take(limit)
            .map(|row| RawHit {
                url: row.link,
                title: row.title,
                snippet: row.snippet,
            })
            .collect())
    }
}
