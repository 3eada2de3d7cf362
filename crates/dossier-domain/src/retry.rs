//! Centralized retry policy
//!
//! One policy object covers both search and synthesis calls instead of
//! per-call-site retry constants.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Attempt count and backoff base for retryable calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, first try included
    pub max_attempts: u32,

    /// Base delay before the first retry, doubled per subsequent retry
    pub base_delay_ms: u64,
}

impl RetryPolicy {
    /// Backoff before the given retry (1-based; attempt 0 has no delay)
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            base_delay_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy {
            max_attempts: 4,
            base_delay_ms: 100,
        };
        assert_eq!(policy.backoff_delay(0), Duration::ZERO);
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(100));
        assert_eq!(policy.backoff_delay(2), Duration::from_millis(200));
        assert_eq!(policy.backoff_delay(3), Duration::from_millis(400));
    }

    #[test]
    fn test_default_is_one_retry() {
        assert_eq!(RetryPolicy::default().max_attempts, 2);
    }
}
