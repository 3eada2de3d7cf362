//! Core synthesis engine

use crate::error::SynthesisError;
use crate::parser::parse_draft;
use crate::prompt::{PromptBuilder, DEFAULT_EXCERPT_BUDGET};
use crate::types::ProfileDraft;
use dossier_domain::{EvidencePool, ExtractedIdentifier};
use dossier_llm::LlmProvider;
use std::time::Duration;
use tokio::time::{timeout, Instant};
use tracing::{debug, warn};

/// Configuration for the synthesis phase
#[derive(Debug, Clone)]
pub struct SynthesizerConfig {
    /// Timeout for a single completion request
    pub request_timeout: Duration,

    /// Character budget for the evidence excerpt section
    pub excerpt_budget: usize,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            excerpt_budget: DEFAULT_EXCERPT_BUDGET,
        }
    }
}

/// Turns an evidence pool and extracted identifiers into a profile draft
///
/// Recovery policy, one retry per failure mode:
/// - a completion timeout retries once with the excerpt budget halved
/// - an unparseable reply retries once with a corrective re-prompt
///
/// A second failure of either kind surfaces as an error; the caller
/// decides whether a draftless (degraded) profile is acceptable.
pub struct Synthesizer<L: LlmProvider> {
    provider: L,
    config: SynthesizerConfig,
}

impl<L: LlmProvider> Synthesizer<L> {
    /// Create a new synthesizer over a provider
    pub fn new(provider: L, config: SynthesizerConfig) -> Self {
        Self { provider, config }
    }

    /// Synthesize a draft from the run's evidence
    pub async fn synthesize(
        &self,
        company_name: &str,
        pool: &EvidencePool,
        identifiers: &[ExtractedIdentifier],
        deadline: Option<Instant>,
    ) -> Result<ProfileDraft, SynthesisError> {
        let prompt = self.build_prompt(company_name, pool, identifiers, self.config.excerpt_budget);
        debug!(prompt_chars = prompt.len(), "synthesis prompt built");

        match self.complete_once(&prompt, deadline).await {
            Ok(reply) => self.parse_with_repair(&prompt, reply, deadline).await,
            Err(SynthesisError::Timeout) => {
                warn!("completion timed out, retrying with trimmed excerpts");
                let trimmed = self.build_prompt(
                    company_name,
                    pool,
                    identifiers,
                    self.config.excerpt_budget / 2,
                );
                let reply = self.complete_once(&trimmed, deadline).await?;
                self.parse_with_repair(&trimmed, reply, deadline).await
            }
            Err(e) => Err(e),
        }
    }

    fn build_prompt(
        &self,
        company_name: &str,
        pool: &EvidencePool,
        identifiers: &[ExtractedIdentifier],
        excerpt_budget: usize,
    ) -> String {
        PromptBuilder::new(company_name)
            .with_evidence(pool)
            .with_identifiers(identifiers)
            .with_excerpt_budget(excerpt_budget)
            .build()
    }

    /// Parse a reply, re-prompting once if it is not valid JSON
    async fn parse_with_repair(
        &self,
        prompt: &str,
        reply: String,
        deadline: Option<Instant>,
    ) -> Result<ProfileDraft, SynthesisError> {
        match parse_draft(&reply) {
            Ok(draft) => Ok(draft),
            Err(e) => {
                warn!(error = %e, "draft parse failed, requesting corrective reply");
                let repair = format!(
                    "{}\n\nYour previous reply was not valid JSON ({}). \
                     Return ONLY the JSON object, nothing else.",
                    prompt, e
                );
                let reply = self.complete_once(&repair, deadline).await?;
                parse_draft(&reply)
            }
        }
    }

    /// One completion call, bounded by the request timeout and the deadline
    async fn complete_once(
        &self,
        prompt: &str,
        deadline: Option<Instant>,
    ) -> Result<String, SynthesisError> {
        let budget = request_budget(self.config.request_timeout, deadline)
            .ok_or(SynthesisError::Timeout)?;

        match timeout(budget, self.provider.complete(prompt)).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(e)) => Err(SynthesisError::Llm(e.to_string())),
            Err(_) => Err(SynthesisError::Timeout),
        }
    }
}

/// Clamp the per-request timeout to the time left before the deadline
fn request_budget(request_timeout: Duration, deadline: Option<Instant>) -> Option<Duration> {
    match deadline {
        None => Some(request_timeout),
        Some(d) => {
            let remaining = d.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                None
            } else {
                Some(request_timeout.min(remaining))
            }
        }
    }
}
