//! # Proposal Entities
//!
//! A proposal is created once by ingestion and never deleted. Only the
//! lifecycle checker touches it afterwards, and only the `state` field:
//! every other field is immutable post-ingestion, and `state` is
//! monotonic (`Completed` never reverts).

use serde::{Deserialize, Serialize};
use shared_types::Timestamp;

/// Internal proposal identifier, assigned at ingestion.
pub type ProposalId = u64;

/// The governance authority's proposal number.
pub type ExternalProposalId = u64;

/// Governance topics known to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// Election of a new system/replica version.
    SystemUpgrade,
    /// Changes to protocol-level configuration.
    ProtocolConfig,
    /// Admission or removal of network nodes.
    NodeMembership,
    /// Fee and reward parameter changes.
    NetworkEconomics,
}

/// The topics the engine ingests; everything else is ignored at upsert.
pub const ALLOWED_TOPICS: [Topic; 2] = [Topic::SystemUpgrade, Topic::ProtocolConfig];

/// Lifecycle state of a proposal's review window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalState {
    /// Review window is open.
    InProgress,
    /// Review window elapsed; terminal.
    Completed {
        /// When the lifecycle checker observed the window elapse.
        completed_at: Timestamp,
    },
}

impl ProposalState {
    /// True for the terminal state.
    pub fn is_completed(&self) -> bool {
        matches!(self, ProposalState::Completed { .. })
    }
}

/// Filter for proposal listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateFilter {
    /// Only open review windows.
    InProgress,
    /// Only completed proposals.
    Completed,
    /// Everything.
    Any,
}

/// An ingested governance proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Internal identifier.
    pub id: ProposalId,
    /// The authority's proposal number.
    pub external_id: ExternalProposalId,
    /// Governance topic.
    pub topic: Topic,
    /// Principal text of the proposer on the authority side.
    pub proposer: String,
    /// Title as submitted to the authority.
    pub title: String,
    /// Summary as submitted to the authority.
    pub summary: String,
    /// When the proposal was submitted to the authority.
    pub proposed_at: Timestamp,
    /// Review-window lifecycle state.
    pub state: ProposalState,
}

impl Proposal {
    /// True once the review window has closed.
    pub fn is_locked(&self) -> bool {
        self.state.is_completed()
    }

    /// Mark the proposal completed. Monotonic: completing an already
    /// completed proposal keeps the original completion time.
    pub fn complete(&mut self, now: Timestamp) {
        if !self.state.is_completed() {
            self.state = ProposalState::Completed { completed_at: now };
        }
    }

    /// True if this proposal passes the given filter.
    pub fn matches(&self, filter: StateFilter) -> bool {
        match filter {
            StateFilter::Any => true,
            StateFilter::InProgress => !self.state.is_completed(),
            StateFilter::Completed => self.state.is_completed(),
        }
    }
}
