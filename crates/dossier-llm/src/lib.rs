//! Dossier LLM Provider Layer
//!
//! Pluggable LLM backends for profile synthesis.
//!
//! # Architecture
//!
//! The synthesis engine consumes the [`LlmProvider`] trait; any backend
//! that turns a prompt into text satisfies it. Best-effort JSON compliance
//! is all the pipeline requires - malformed output is handled by the
//! synthesizer's one-retry policy.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic scripted responses for testing
//! - `OllamaProvider`: local Ollama API with JSON output mode

#![warn(missing_docs)]

pub mod ollama;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the backend
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available on the backend
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Trait for LLM completion backends
///
/// `complete` takes a fully built prompt (schema description included) and
/// returns the model's raw text. Schema validation happens in the
/// synthesizer, not here.
#[allow(async_fn_in_trait)]
pub trait LlmProvider {
    /// Error type for completion calls
    type Error: std::fmt::Display;

    /// Generate a completion for the prompt
    async fn complete(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// One scripted mock reply
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// Mock LLM provider for deterministic testing
///
/// Replies are consumed as a queue: each `complete` call pops the next
/// scripted reply, falling back to the default response when the queue is
/// empty. This makes retry paths (malformed first reply, valid second)
/// straightforward to script.
///
/// # Examples
///
/// ```
/// use dossier_llm::{LlmProvider, MockProvider};
///
/// # tokio_test::block_on(async {
/// let provider = MockProvider::new("{}")
///     .with_reply("not json")
///     .with_reply(r#"{"legal_name": "Apple Inc."}"#);
///
/// assert_eq!(provider.complete("p").await.unwrap(), "not json");
/// assert_eq!(
///     provider.complete("p").await.unwrap(),
///     r#"{"legal_name": "Apple Inc."}"#
/// );
/// assert_eq!(provider.complete("p").await.unwrap(), "{}");
/// assert_eq!(provider.call_count(), 3);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a mock with a fixed fallback response
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            default_response: default_response.into(),
            replies: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a scripted reply
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(reply.into()));
        self
    }

    /// Queue a scripted error
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(message.into()));
        self
    }

    /// Number of completion calls made so far
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Error(message)) => Err(LlmError::Other(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_response() {
        let provider = MockProvider::new("fallback");
        assert_eq!(provider.complete("anything").await.unwrap(), "fallback");
    }

    #[tokio::test]
    async fn test_mock_replies_consumed_in_order() {
        let provider = MockProvider::new("fallback")
            .with_reply("first")
            .with_reply("second");

        assert_eq!(provider.complete("p1").await.unwrap(), "first");
        assert_eq!(provider.complete("p2").await.unwrap(), "second");
        assert_eq!(provider.complete("p3").await.unwrap(), "fallback");
    }

    #[tokio::test]
    async fn test_mock_scripted_error() {
        let provider = MockProvider::default().with_error("boom");
        let result = provider.complete("p").await;
        assert!(matches!(result, Err(LlmError::Other(_))));
    }

    #[tokio::test]
    async fn test_mock_records_prompts() {
        let provider = MockProvider::default();
        provider.complete("alpha").await.unwrap();
        provider.complete("beta").await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_mock_clone_shares_state() {
        let a = MockProvider::default();
        let b = a.clone();
        a.complete("p").await.unwrap();

        assert_eq!(b.call_count(), 1);
    }
}
