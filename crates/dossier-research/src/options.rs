//! Configuration for a research run

use dossier_domain::{IdentifierKind, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the research pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchOptions {
    /// Maximum hits requested per search query
    pub per_query_limit: usize,

    /// Wall-clock budget for the whole run (seconds)
    pub overall_deadline_secs: u64,

    /// Slice of the deadline reserved for synthesis (seconds)
    pub synthesis_reserve_secs: u64,

    /// Upper bound on simultaneous outstanding search requests
    pub max_concurrency: usize,

    /// Timeout for a single search request (seconds)
    pub search_timeout_secs: u64,

    /// Timeout for a single LLM completion (seconds)
    pub synthesis_timeout_secs: u64,

    /// Identifier kind names to extract
    pub identifier_kinds: Vec<String>,

    /// Retry policy for search queries
    pub retry: RetryPolicy,
}

impl Default for ResearchOptions {
    fn default() -> Self {
        Self {
            per_query_limit: 12,
            overall_deadline_secs: 120,
            synthesis_reserve_secs: 30,
            max_concurrency: 6,
            search_timeout_secs: 20,
            synthesis_timeout_secs: 60,
            identifier_kinds: IdentifierKind::all()
                .iter()
                .map(|k| k.as_str().to_string())
                .collect(),
            retry: RetryPolicy::default(),
        }
    }
}

impl ResearchOptions {
    /// The whole-run deadline as a Duration
    pub fn overall_deadline(&self) -> Duration {
        Duration::from_secs(self.overall_deadline_secs)
    }

    /// Budget for the search phase: the deadline minus the synthesis
    /// reserve, with the reserve capped at half the deadline
    pub fn search_budget(&self) -> Duration {
        let reserve = self.synthesis_reserve_secs.min(self.overall_deadline_secs / 2);
        Duration::from_secs(self.overall_deadline_secs - reserve)
    }

    /// Timeout for a single search request
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    /// Timeout for a single LLM completion
    pub fn synthesis_timeout(&self) -> Duration {
        Duration::from_secs(self.synthesis_timeout_secs)
    }

    /// The configured identifier kinds, parsed
    ///
    /// Unknown names are dropped; `validate` rejects them upfront.
    pub fn kinds(&self) -> Vec<IdentifierKind> {
        self.identifier_kinds
            .iter()
            .filter_map(|s| IdentifierKind::parse(s))
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.per_query_limit == 0 {
            return Err("per_query_limit must be greater than 0".to_string());
        }
        if self.overall_deadline_secs == 0 {
            return Err("overall_deadline_secs must be greater than 0".to_string());
        }
        if self.max_concurrency == 0 {
            return Err("max_concurrency must be greater than 0".to_string());
        }
        if self.search_timeout_secs == 0 {
            return Err("search_timeout_secs must be greater than 0".to_string());
        }
        if self.synthesis_timeout_secs == 0 {
            return Err("synthesis_timeout_secs must be greater than 0".to_string());
        }
        if self.identifier_kinds.is_empty() {
            return Err("identifier_kinds must not be empty".to_string());
        }
        for name in &self.identifier_kinds {
            if IdentifierKind::parse(name).is_none() {
                return Err(format!("Unknown identifier kind: {}", name));
            }
        }
        if self.retry.max_attempts == 0 {
            return Err("retry.max_attempts must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load options from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize options to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = ResearchOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.kinds().len(), 6);
    }

    #[test]
    fn test_search_budget_reserves_synthesis_slice() {
        let options = ResearchOptions::default();
        assert_eq!(options.search_budget(), Duration::from_secs(90));
    }

    #[test]
    fn test_reserve_capped_at_half_the_deadline() {
        let options = ResearchOptions {
            overall_deadline_secs: 40,
            synthesis_reserve_secs: 30,
            ..ResearchOptions::default()
        };
        assert_eq!(options.search_budget(), Duration::from_secs(20));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let options = ResearchOptions {
            identifier_kinds: vec!["LEI".to_string(), "DUNS".to_string()],
            ..ResearchOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_zero_deadline_rejected() {
        let options = ResearchOptions {
            overall_deadline_secs: 0,
            ..ResearchOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let options = ResearchOptions::default();
        let toml_str = options.to_toml().unwrap();
        let parsed = ResearchOptions::from_toml(&toml_str).unwrap();

        assert_eq!(options.per_query_limit, parsed.per_query_limit);
        assert_eq!(options.overall_deadline_secs, parsed.overall_deadline_secs);
        assert_eq!(options.identifier_kinds, parsed.identifier_kinds);
    }

    #[test]
    fn test_partial_toml_is_an_error() {
        // Options files are explicit; missing fields don't silently default
        assert!(ResearchOptions::from_toml("per_query_limit = 5").is_err());
    }
}
