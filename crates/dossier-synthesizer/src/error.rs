//! Error types for profile synthesis

use thiserror::Error;

/// Errors that can occur while synthesizing a profile draft
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Completion did not finish within the time budget
    #[error("Synthesis timeout")]
    Timeout,

    /// Model output could not be parsed into a draft
    #[error("Invalid draft format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for SynthesisError {
    fn from(e: serde_json::Error) -> Self {
        SynthesisError::InvalidFormat(e.to_string())
    }
}
