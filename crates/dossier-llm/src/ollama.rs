//! Ollama provider implementation
//!
//! Talks to a local Ollama instance. Structured synthesis works best with
//! Ollama's JSON output mode enabled, which constrains generation to valid
//! JSON; the schema itself still travels in the prompt.

use crate::{LlmError, LlmProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for a single completion request
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts per completion
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Ollama API provider for local LLM inference
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
    json_mode: bool,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    // Low temperature: extraction, not creative writing
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Other(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
            json_mode: true,
        })
    }

    /// Create a provider against the default local endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the maximum number of attempts per completion
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Enable or disable Ollama's constrained JSON output mode
    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            format: self.json_mode.then_some("json"),
            options: GenerateOptions { temperature: 0.1 },
        };

        // Retry with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return match response.json::<GenerateResponse>().await {
                            Ok(body) => Ok(body.response),
                            Err(e) => Err(LlmError::InvalidResponse(format!(
                                "Failed to parse response: {}",
                                e
                            ))),
                        };
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error =
                        Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProvider for OllamaProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        self.generate(prompt).await
    }
}
