//! Per-run execution metadata

use uuid::Uuid;

/// Execution metadata for one research run
///
/// Created by the pipeline and folded into the assembled profile's audit
/// trail. UUIDv7 run ids sort by creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    /// Unique run identifier
    pub run_id: Uuid,

    /// Company name the run was asked about
    pub company_name: String,

    /// Queries the planner produced
    pub queries_planned: usize,

    /// Queries that returned results before the deadline
    pub queries_succeeded: usize,

    /// Whether the run hit its deadline or lost synthesis
    pub degraded: bool,

    /// Wall-clock duration of the run
    pub duration_ms: u64,
}

impl RunMetadata {
    /// Start metadata for a new run
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::now_v7(),
            company_name: company_name.into(),
            queries_planned: 0,
            queries_succeeded: 0,
            degraded: false,
            duration_ms: 0,
        }
    }
}
