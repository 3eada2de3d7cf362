//! Dossier Search Layer
//!
//! Search backends and the result aggregator.
//!
//! # Architecture
//!
//! The aggregator consumes the [`SearchProvider`] trait: anything that
//! answers a query string with `{url, title, snippet}` rows is an
//! interchangeable backend. Raw backend JSON never leaves this crate -
//! responses are validated into [`RawHit`] at the boundary.
//!
//! # Providers
//!
//! - `MockSearchProvider`: scripted results for testing
//! - `SerperProvider`: Serper.dev Google search API

#![warn(missing_docs)]

pub mod aggregator;
pub mod mock;
pub mod serper;

use thiserror::Error;

pub use aggregator::{aggregate, AggregateOutcome, AggregatorConfig};
pub use mock::MockSearchProvider;
pub use serper::SerperProvider;

/// Errors from search backends and aggregation
#[derive(Error, Debug)]
pub enum SearchError {
    /// Network or API communication error for a single request
    #[error("Search backend error: {0}")]
    Backend(String),

    /// Response did not match the expected shape
    #[error("Invalid search response: {0}")]
    InvalidResponse(String),

    /// Every planned query failed; the run cannot proceed
    #[error("All {attempted} search queries failed")]
    AllQueriesFailed {
        /// Number of queries attempted before giving up
        attempted: usize,
    },
}

/// One validated search result row from a backend
///
/// Attribution to a query category happens in the aggregator; providers
/// only see query strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHit {
    /// Result URL
    pub url: String,

    /// Result title
    pub title: String,

    /// Result snippet text
    pub snippet: String,
}

/// Trait for web search backends
#[allow(async_fn_in_trait)]
pub trait SearchProvider {
    /// Error type for search calls
    type Error: std::fmt::Display;

    /// Run one search, returning at most `limit` hits in rank order
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawHit>, Self::Error>;
}
