//! # Sync Domain
//!
//! Result types for a sync run.

use serde::{Deserialize, Serialize};

/// Outcome of one logical sync run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    /// Proposals newly ingested during this run.
    pub synced_count: u64,
    /// Proposals whose review window closed during the post-run
    /// lifecycle check.
    pub completed_count: u64,
}
