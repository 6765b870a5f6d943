//! # Port Adapters
//!
//! The subsystem crates talk to each other through their outbound ports
//! only. These adapters implement those ports over the real stores, each
//! taking a brief lock on its target and releasing it before returning.

use gr_02_proposals::ProposalStore;
use gr_04_reviews::{ProposalGuard, ReviewStore};
use gr_05_certified_assets::ReviewGuard;
use parking_lot::RwLock;
use shared_types::{EngineResult, Principal};
use std::sync::Arc;

/// [`ProposalGuard`] over the live proposal store.
pub struct ProposalStoreGuard {
    proposals: Arc<RwLock<ProposalStore>>,
}

impl ProposalStoreGuard {
    /// Wrap a proposal store handle.
    pub fn new(proposals: Arc<RwLock<ProposalStore>>) -> Self {
        Self { proposals }
    }
}

impl ProposalGuard for ProposalStoreGuard {
    fn is_locked(&self, proposal_id: u64) -> EngineResult<bool> {
        self.proposals.read().is_locked(proposal_id)
    }
}

/// [`ReviewGuard`] over the live review store.
pub struct ReviewStoreGuard {
    reviews: Arc<RwLock<ReviewStore>>,
}

impl ReviewStoreGuard {
    /// Wrap a review store handle.
    pub fn new(reviews: Arc<RwLock<ReviewStore>>) -> Self {
        Self { reviews }
    }
}

impl ReviewGuard for ReviewStoreGuard {
    fn ensure_owned_and_mutable(&self, caller: &Principal, review_id: u64) -> EngineResult<()> {
        self.reviews.read().ensure_owned_and_mutable(caller, review_id)
    }

    fn record_image_path(&self, review_id: u64, path: &str) -> EngineResult<()> {
        self.reviews.write().record_image_path(review_id, path)
    }

    fn remove_image_path(&self, review_id: u64, path: &str) -> EngineResult<bool> {
        self.reviews.write().remove_image_path(review_id, path)
    }
}
