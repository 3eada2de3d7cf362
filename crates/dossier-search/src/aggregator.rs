//! Search fan-out and evidence aggregation
//!
//! Runs the planned queries against a backend with bounded concurrency,
//! absorbs per-query failures, and merges the hits into a deduplicated
//! [`EvidencePool`]. Ordered buffering keeps the pool in planned-query
//! order no matter how network timing interleaves completions.

use crate::{RawHit, SearchError, SearchProvider};
use dossier_domain::{EvidencePool, RetryPolicy, SearchHit, SearchQuery};
use futures::stream::{self, StreamExt};
use std::time::Duration;
use tokio::time::{timeout, Instant};
use tracing::{debug, warn};

/// Configuration for the aggregation phase
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Maximum hits requested per query
    pub per_query_limit: usize,

    /// Upper bound on simultaneous outstanding search requests
    pub max_concurrency: usize,

    /// Timeout for a single search request
    pub request_timeout: Duration,

    /// Retry policy per query (one retry with backoff by default)
    pub retry: RetryPolicy,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            per_query_limit: 12,
            max_concurrency: 6,
            request_timeout: Duration::from_secs(20),
            retry: RetryPolicy::default(),
        }
    }
}

/// Result of an aggregation pass
#[derive(Debug)]
pub struct AggregateOutcome {
    /// The deduplicated evidence, in planned-query order
    pub pool: EvidencePool,

    /// Queries dispatched (deadline-skipped queries excluded)
    pub queries_attempted: usize,

    /// Queries that completed successfully
    pub queries_succeeded: usize,

    /// Whether the deadline cut the pass short
    pub deadline_hit: bool,
}

enum QueryOutcome {
    Hits(Vec<RawHit>),
    Failed,
    // A dispatched query cut off mid-flight still counts as attempted
    Deadline { dispatched: bool },
}

/// Run all queries and aggregate their hits into an evidence pool
///
/// Per-query failures are logged and skipped; the pass fails only when
/// every dispatched query fails without the deadline being involved. A
/// deadline cutting the pass short is a supported degraded completion -
/// whatever evidence was collected is returned.
pub async fn aggregate<S: SearchProvider>(
    provider: &S,
    queries: &[SearchQuery],
    config: &AggregatorConfig,
    deadline: Option<Instant>,
) -> Result<AggregateOutcome, SearchError> {
    let concurrency = config.max_concurrency.max(1);

    // buffered() preserves input order, so outcomes arrive in planned order
    let outcomes: Vec<(usize, QueryOutcome)> = stream::iter(queries.iter().enumerate())
        .map(|(idx, query)| async move {
            if past_deadline(deadline) {
                debug!(query = %query.text, "deadline reached, skipping query");
                return (idx, QueryOutcome::Deadline { dispatched: false });
            }
            let outcome = search_with_retry(provider, query, config, deadline).await;
            (idx, outcome)
        })
        .buffered(concurrency)
        .collect()
        .await;

    let mut pool = EvidencePool::new();
    let mut attempted = 0;
    let mut succeeded = 0;
    let mut deadline_hit = false;

    for (idx, outcome) in outcomes {
        match outcome {
            QueryOutcome::Hits(hits) => {
                attempted += 1;
                succeeded += 1;
                let query = &queries[idx];
                for (rank, hit) in hits.into_iter().enumerate() {
                    pool.insert(SearchHit {
                        url: hit.url,
                        title: hit.title,
                        snippet: hit.snippet,
                        category: query.category,
                        rank,
                    });
                }
            }
            QueryOutcome::Failed => attempted += 1,
            QueryOutcome::Deadline { dispatched } => {
                if dispatched {
                    attempted += 1;
                }
                deadline_hit = true;
            }
        }
    }

    if attempted > 0 && succeeded == 0 && !deadline_hit {
        return Err(SearchError::AllQueriesFailed { attempted });
    }

    debug!(
        entries = pool.len(),
        attempted, succeeded, deadline_hit, "aggregation complete"
    );

    Ok(AggregateOutcome {
        pool,
        queries_attempted: attempted,
        queries_succeeded: succeeded,
        deadline_hit,
    })
}

async fn search_with_retry<S: SearchProvider>(
    provider: &S,
    query: &SearchQuery,
    config: &AggregatorConfig,
    deadline: Option<Instant>,
) -> QueryOutcome {
    let attempts = config.retry.max_attempts.max(1);
    let mut dispatched = false;

    for attempt in 0..attempts {
        if attempt > 0 {
            let delay = config.retry.backoff_delay(attempt);
            if exceeds_deadline(deadline, delay) {
                return QueryOutcome::Deadline { dispatched };
            }
            tokio::time::sleep(delay).await;
        }

        let budget = match request_budget(config.request_timeout, deadline) {
            Some(budget) => budget,
            None => return QueryOutcome::Deadline { dispatched },
        };

        dispatched = true;
        match timeout(budget, provider.search(&query.text, config.per_query_limit)).await {
            Ok(Ok(hits)) => return QueryOutcome::Hits(hits),
            Ok(Err(e)) => {
                warn!(query = %query.text, attempt, error = %e, "search attempt failed");
            }
            Err(_) => {
                // In-flight request abandoned; its results are discarded
                if past_deadline(deadline) {
                    return QueryOutcome::Deadline { dispatched };
                }
                warn!(query = %query.text, attempt, "search attempt timed out");
            }
        }
    }

    QueryOutcome::Failed
}

fn past_deadline(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

fn exceeds_deadline(deadline: Option<Instant>, delay: Duration) -> bool {
    deadline.is_some_and(|d| Instant::now() + delay >= d)
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
