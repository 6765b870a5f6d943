//! # Sync Configuration

use serde::{Deserialize, Serialize};

/// Default page size for authority queries.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Sync scheduler configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Items requested per authority page. A returned page shorter than
    /// this ends the run.
    pub page_size: u32,
    /// Interval between automatic timer ticks, in seconds.
    pub interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            interval_secs: 5 * 60,
        }
    }
}

impl SyncConfig {
    /// Create a config for testing (small pages, fast ticks).
    pub fn for_testing() -> Self {
        Self {
            page_size: 5,
            interval_secs: 1,
        }
    }
}
