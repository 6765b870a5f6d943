//! # Proposal Configuration

use serde::{Deserialize, Serialize};

/// Default review window: 3 days.
pub const DEFAULT_REVIEW_PERIOD_SECS: u64 = 3 * 24 * 60 * 60;

/// Configuration for the proposal lifecycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalConfig {
    /// Length of the review window in seconds. Once a proposal has been
    /// open this long it transitions to `Completed` on the next check.
    pub review_period_secs: u64,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            review_period_secs: DEFAULT_REVIEW_PERIOD_SECS,
        }
    }
}

impl ProposalConfig {
    /// Create a config for testing (short window).
    pub fn for_testing() -> Self {
        Self {
            review_period_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProposalConfig::default();
        assert_eq!(config.review_period_secs, 259_200);
    }

    #[test]
    fn test_testing_config() {
        let config = ProposalConfig::for_testing();
        assert_eq!(config.review_period_secs, 60);
    }
}
