//! # Governance Authority Port
//!
//! Outbound port to the external governance authority. This is the only
//! async boundary in the engine: every await here is a suspension point
//! where other messages may interleave.

use async_trait::async_trait;
use gr_02_proposals::{NewProposal, Topic};
use shared_types::{EngineError, EngineResult};
use std::sync::Mutex;

/// External governance authority - outbound port.
#[async_trait]
pub trait GovernanceClient: Send + Sync {
    /// Query one page of proposals matching the given topics.
    ///
    /// The final page of a backlog holds fewer than `limit` items
    /// (possibly zero).
    async fn list_proposals(
        &self,
        topics: &[Topic],
        limit: u32,
        offset: u64,
    ) -> EngineResult<Vec<NewProposal>>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Scriptable governance authority for tests.
#[derive(Default)]
pub struct MockGovernanceClient {
    inner: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    backlog: Vec<NewProposal>,
    /// Fail every call once set.
    should_fail: bool,
    /// Fail calls at or after this offset, if set.
    fail_at_offset: Option<u64>,
    /// Number of calls served (for assertions on paging).
    calls: u64,
}

impl MockGovernanceClient {
    /// Create an empty authority.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending backlog.
    pub fn set_backlog(&self, backlog: Vec<NewProposal>) {
        self.inner.lock().expect("mock poisoned").backlog = backlog;
    }

    /// Make every call fail.
    pub fn set_should_fail(&self, fail: bool) {
        self.inner.lock().expect("mock poisoned").should_fail = fail;
    }

    /// Make calls fail once the requested offset reaches `offset`.
    pub fn fail_at_offset(&self, offset: u64) {
        self.inner.lock().expect("mock poisoned").fail_at_offset = Some(offset);
    }

    /// Pages served so far.
    pub fn call_count(&self) -> u64 {
        self.inner.lock().expect("mock poisoned").calls
    }
}

#[async_trait]
impl GovernanceClient for MockGovernanceClient {
    async fn list_proposals(
        &self,
        topics: &[Topic],
        limit: u32,
        offset: u64,
    ) -> EngineResult<Vec<NewProposal>> {
        let mut state = self.inner.lock().expect("mock poisoned");
        state.calls += 1;

        if state.should_fail {
            return Err(EngineError::internal("authority unavailable"));
        }
        if let Some(fail_offset) = state.fail_at_offset {
            if offset >= fail_offset {
                return Err(EngineError::internal("authority unavailable"));
            }
        }

        let matching: Vec<NewProposal> = state
            .backlog
            .iter()
            .filter(|p| topics.contains(&p.topic))
            .cloned()
            .collect();

        let start = (offset as usize).min(matching.len());
        let end = (start + limit as usize).min(matching.len());
        Ok(matching[start..end].to_vec())
    }
}
