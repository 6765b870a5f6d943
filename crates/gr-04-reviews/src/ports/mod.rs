//! # Proposal Guard Port
//!
//! The review store needs exactly two facts about a proposal: does it
//! exist, and has its review window closed. This port keeps the crate
//! decoupled from the proposal subsystem; the runtime wires it to the
//! real store.

use shared_types::EngineResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// Proposal existence and lock state - outbound port.
pub trait ProposalGuard: Send + Sync {
    /// True if the proposal's review window has closed.
    ///
    /// # Errors
    /// - 404 if the proposal is unknown
    fn is_locked(&self, proposal_id: u64) -> EngineResult<bool>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// In-memory proposal guard for tests.
#[derive(Default)]
pub struct MockProposalGuard {
    proposals: Mutex<HashMap<u64, bool>>,
}

impl MockProposalGuard {
    /// Create an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a proposal with an open review window.
    pub fn add_open(&self, proposal_id: u64) {
        self.proposals
            .lock()
            .expect("guard poisoned")
            .insert(proposal_id, false);
    }

    /// Register a proposal whose window has closed.
    pub fn add_completed(&self, proposal_id: u64) {
        self.proposals
            .lock()
            .expect("guard poisoned")
            .insert(proposal_id, true);
    }

    /// Close an existing proposal's window.
    pub fn complete(&self, proposal_id: u64) {
        self.proposals
            .lock()
            .expect("guard poisoned")
            .insert(proposal_id, true);
    }
}

impl ProposalGuard for MockProposalGuard {
    fn is_locked(&self, proposal_id: u64) -> EngineResult<bool> {
        self.proposals
            .lock()
            .expect("guard poisoned")
            .get(&proposal_id)
            .copied()
            .ok_or_else(|| shared_types::EngineError::not_found(format!("proposal {proposal_id}")))
    }
}
