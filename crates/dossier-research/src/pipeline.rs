//! The research pipeline
//!
//! One entry point: plan queries, aggregate evidence, extract identifiers,
//! synthesize a draft, assemble the profile. Search runs against a budget
//! that reserves a slice of the overall deadline for synthesis; losing the
//! draft (timeout, schema, provider failure) degrades the profile instead
//! of failing the run.

use crate::assembler;
use crate::error::ResearchError;
use crate::options::ResearchOptions;
use crate::planner;
use dossier_domain::{CompanyProfile, RunMetadata};
use dossier_llm::LlmProvider;
use dossier_search::{aggregate, AggregatorConfig, SearchProvider};
use dossier_synthesizer::{Synthesizer, SynthesizerConfig};
use tokio::time::Instant;
use tracing::{info, warn};

/// Runs company research end to end
pub struct Researcher<S, L>
where
    S: SearchProvider,
    L: LlmProvider,
{
    search: S,
    synthesizer: Synthesizer<L>,
    options: ResearchOptions,
}

impl<S, L> Researcher<S, L>
where
    S: SearchProvider,
    L: LlmProvider,
{
    /// Create a researcher over a search backend and an LLM provider
    pub fn new(search: S, llm: L, options: ResearchOptions) -> Self {
        let synthesizer = Synthesizer::new(
            llm,
            SynthesizerConfig {
                request_timeout: options.synthesis_timeout(),
                ..SynthesizerConfig::default()
            },
        );
        Self {
            search,
            synthesizer,
            options,
        }
    }

    /// Research a company name into a structured profile
    pub async fn research(&self, company_name: &str) -> Result<CompanyProfile, ResearchError> {
        let start = Instant::now();
        let overall_deadline = start + self.options.overall_deadline();
        let search_deadline = start + self.options.search_budget();

        let queries = planner::plan(company_name)?;
        let mut metadata = RunMetadata::new(company_name);
        metadata.queries_planned = queries.len();

        info!(
            run_id = %metadata.run_id,
            company = company_name,
            queries = queries.len(),
            "research run started"
        );

        let aggregator_config = AggregatorConfig {
            per_query_limit: self.options.per_query_limit,
            max_concurrency: self.options.max_concurrency,
            request_timeout: self.options.search_timeout(),
            retry: self.options.retry.clone(),
        };
        let outcome = aggregate(
            &self.search,
            &queries,
            &aggregator_config,
            Some(search_deadline),
        )
        .await?;

        metadata.queries_succeeded = outcome.queries_succeeded;
        metadata.degraded = outcome.deadline_hit;

        let identifiers = dossier_extractor::extract(&outcome.pool, &self.options.kinds());
        info!(
            run_id = %metadata.run_id,
            evidence = outcome.pool.len(),
            identifiers = identifiers.len(),
            "evidence aggregated"
        );

        let draft = match self
            .synthesizer
            .synthesize(
                company_name,
                &outcome.pool,
                &identifiers,
                Some(overall_deadline),
            )
            .await
        {
            Ok(draft) => Some(draft),
            Err(e) => {
                warn!(run_id = %metadata.run_id, error = %e, "synthesis failed, degrading profile");
                metadata.degraded = true;
                None
            }
        };

        metadata.duration_ms = start.elapsed().as_millis() as u64;
        let profile = assembler::assemble(
            company_name,
            draft,
            &identifiers,
            &outcome.pool,
            &metadata,
        );

        info!(
            run_id = %metadata.run_id,
            duration_ms = metadata.duration_ms,
            degraded = metadata.degraded,
            "research run complete"
        );

        Ok(profile)
    }
}
