//! # Proposal Store
//!
//! In-memory store for ingested proposals. Writes come from two places
//! only: ingestion (`upsert`, insert-or-ignore) and the lifecycle checker
//! (`run_lifecycle_check`, state field only). Nothing is ever deleted.

use crate::config::ProposalConfig;
use crate::domain::{
    next_state, ExternalProposalId, Proposal, ProposalId, ProposalState, StateFilter, Topic,
    ALLOWED_TOPICS,
};
use shared_types::{EngineError, EngineResult, Timestamp};
use std::collections::{BTreeMap, HashMap};

/// Fields of a proposal as received from the governance authority.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProposal {
    /// The authority's proposal number.
    pub external_id: ExternalProposalId,
    /// Governance topic.
    pub topic: Topic,
    /// Proposer principal text.
    pub proposer: String,
    /// Title.
    pub title: String,
    /// Summary.
    pub summary: String,
    /// Submission time on the authority.
    pub proposed_at: Timestamp,
}

/// In-memory proposal store with the lifecycle checker.
pub struct ProposalStore {
    config: ProposalConfig,
    /// Proposals by internal id; the id doubles as insertion order.
    proposals: BTreeMap<ProposalId, Proposal>,
    /// Index from the authority's number to the internal id.
    by_external_id: HashMap<ExternalProposalId, ProposalId>,
    next_id: ProposalId,
}

impl ProposalStore {
    /// Create an empty store.
    pub fn new(config: ProposalConfig) -> Self {
        Self {
            config,
            proposals: BTreeMap::new(),
            by_external_id: HashMap::new(),
            next_id: 1,
        }
    }

    /// Insert a proposal if its external id is unknown; ignore otherwise.
    ///
    /// Ingestion never alters content of a known proposal, so re-syncing
    /// the same page is a no-op. Proposals outside the topic allow-list
    /// are dropped. Returns true if a new proposal was inserted.
    pub fn upsert(&mut self, fields: NewProposal) -> bool {
        if !ALLOWED_TOPICS.contains(&fields.topic) {
            tracing::debug!(
                external_id = fields.external_id,
                "ignoring proposal outside topic allow-list"
            );
            return false;
        }
        if self.by_external_id.contains_key(&fields.external_id) {
            return false;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.by_external_id.insert(fields.external_id, id);
        self.proposals.insert(
            id,
            Proposal {
                id,
                external_id: fields.external_id,
                topic: fields.topic,
                proposer: fields.proposer,
                title: fields.title,
                summary: fields.summary,
                proposed_at: fields.proposed_at,
                state: ProposalState::InProgress,
            },
        );
        tracing::info!(proposal_id = id, "ingested proposal");
        true
    }

    /// Get a proposal by internal id.
    pub fn get(&self, id: ProposalId) -> EngineResult<&Proposal> {
        self.proposals
            .get(&id)
            .ok_or_else(|| EngineError::not_found(format!("proposal {id}")))
    }

    /// Get a proposal by the authority's number.
    pub fn get_by_external_id(&self, external_id: ExternalProposalId) -> Option<&Proposal> {
        self.by_external_id
            .get(&external_id)
            .and_then(|id| self.proposals.get(id))
    }

    /// True if the proposal exists.
    pub fn exists(&self, id: ProposalId) -> bool {
        self.proposals.contains_key(&id)
    }

    /// True if the proposal's review window has closed.
    ///
    /// # Errors
    /// - 404 if the proposal is unknown
    pub fn is_locked(&self, id: ProposalId) -> EngineResult<bool> {
        Ok(self.get(id)?.is_locked())
    }

    /// List proposals matching a filter, sorted by `proposed_at`
    /// descending, ties broken by insertion order.
    pub fn list(&self, filter: StateFilter) -> Vec<Proposal> {
        let mut out: Vec<Proposal> = self
            .proposals
            .values()
            .filter(|p| p.matches(filter))
            .cloned()
            .collect();
        // `id` is the insertion order, already ascending from BTreeMap
        // iteration, and sort_by_key is stable.
        out.sort_by_key(|p| std::cmp::Reverse(p.proposed_at));
        out
    }

    /// Apply the lifecycle function to every open proposal.
    ///
    /// Returns the number of proposals that transitioned to `Completed`
    /// during this check.
    pub fn run_lifecycle_check(&mut self, now: Timestamp) -> usize {
        let period = self.config.review_period_secs;
        let mut completed = 0;
        for proposal in self.proposals.values_mut() {
            let state = next_state(now, proposal.proposed_at, proposal.state, period);
            if state.is_completed() && !proposal.state.is_completed() {
                proposal.state = state;
                completed += 1;
                tracing::info!(proposal_id = proposal.id, "review window closed");
            }
        }
        completed
    }

    /// Number of stored proposals.
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    /// True if no proposals have been ingested.
    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
