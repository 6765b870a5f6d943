//! # Engine Facade
//!
//! Owns every subsystem store, wires the port adapters between them, and
//! exposes the outward operation surface. Each method maps the store
//! result 1:1 into the [`ApiResponse`] envelope; codes and messages pass
//! through untouched.
//!
//! Locks are short: a method takes the one store lock it needs, finishes
//! the synchronous store call, and releases it. No lock is ever held
//! across an await point; the only await in the engine is the governance
//! call inside the sync scheduler.

use crate::adapters::{ProposalStoreGuard, ReviewStoreGuard};
use ed25519_dalek::VerifyingKey;
use gr_01_authorization::{AuthorizationGate, ProfileDirectory};
use gr_02_proposals::{Proposal, ProposalConfig, ProposalId, ProposalStore, StateFilter};
use gr_03_proposal_sync::{GovernanceClient, SyncConfig, SyncOutcome, SyncScheduler};
use gr_04_reviews::{
    CommitReview, CommitState, ProposalGuard, ProposalReview, ReviewDraft, ReviewId, ReviewStore,
};
use gr_05_certified_assets::{
    gateway, AssetConfig, CertifiedAssetStore, HttpRequest, HttpResponse, NetworkIdentity,
    ReviewGuard,
};
use parking_lot::RwLock;
use shared_types::{ApiResponse, Principal, ProfileId, Timestamp};
use std::sync::Arc;

/// Configuration for every subsystem the engine owns.
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    /// Proposal store settings (review period).
    pub proposals: ProposalConfig,
    /// Sync scheduler settings (page size, timer interval).
    pub sync: SyncConfig,
    /// Asset store settings (upload cap).
    pub assets: AssetConfig,
}

impl EngineConfig {
    /// Create a config for testing (short review period, small pages).
    pub fn for_testing() -> Self {
        Self {
            proposals: ProposalConfig::for_testing(),
            sync: SyncConfig::for_testing(),
            assets: AssetConfig::for_testing(),
        }
    }
}

/// The assembled review engine.
pub struct Engine {
    proposals: Arc<RwLock<ProposalStore>>,
    reviews: Arc<RwLock<ReviewStore>>,
    assets: Arc<RwLock<CertifiedAssetStore>>,
    scheduler: Arc<SyncScheduler>,
}

impl Engine {
    /// Wire the engine over its two external collaborators and the
    /// network signing identity.
    pub fn new(
        config: EngineConfig,
        profiles: Arc<dyn ProfileDirectory>,
        governance: Arc<dyn GovernanceClient>,
        identity: NetworkIdentity,
    ) -> Self {
        let gate = AuthorizationGate::new(profiles);

        let proposals = Arc::new(RwLock::new(ProposalStore::new(config.proposals)));
        let proposal_guard: Arc<dyn ProposalGuard> =
            Arc::new(ProposalStoreGuard::new(proposals.clone()));

        let reviews = Arc::new(RwLock::new(ReviewStore::new(gate.clone(), proposal_guard)));
        let review_guard: Arc<dyn ReviewGuard> = Arc::new(ReviewStoreGuard::new(reviews.clone()));

        let assets = Arc::new(RwLock::new(CertifiedAssetStore::new(
            config.assets,
            review_guard,
            identity,
        )));

        let scheduler = Arc::new(SyncScheduler::new(
            config.sync,
            gate,
            governance,
            proposals.clone(),
        ));

        tracing::info!("engine assembled");
        Self {
            proposals,
            reviews,
            assets,
            scheduler,
        }
    }

    // =========================================================================
    // Proposals
    // =========================================================================

    /// List ingested proposals by state filter. Public read.
    pub fn list_proposals(&self, filter: StateFilter) -> ApiResponse<Vec<Proposal>> {
        ApiResponse::Ok(self.proposals.read().list(filter))
    }

    /// Get a single proposal. Public read.
    pub fn get_proposal(&self, proposal_id: ProposalId) -> ApiResponse<Proposal> {
        self.proposals.read().get(proposal_id).cloned().into()
    }

    /// Manually trigger a sync run against the governance authority.
    /// Admin only.
    pub async fn sync_proposals(
        &self,
        caller: &Principal,
        now: Timestamp,
    ) -> ApiResponse<SyncOutcome> {
        self.scheduler.sync(caller, now).await.into()
    }

    /// Spawn the recurring sync timer.
    pub fn spawn_sync_timer(&self) -> tokio::task::JoinHandle<()> {
        self.scheduler.clone().spawn_timer()
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Create a draft review of a proposal.
    pub fn create_review(
        &self,
        caller: &Principal,
        proposal_id: ProposalId,
        draft: ReviewDraft,
        now: Timestamp,
    ) -> ApiResponse<ProposalReview> {
        self.reviews
            .write()
            .create_review(caller, proposal_id, draft, now)
            .into()
    }

    /// Update the caller's own draft review.
    pub fn update_review(
        &self,
        caller: &Principal,
        proposal_id: ProposalId,
        draft: ReviewDraft,
        now: Timestamp,
    ) -> ApiResponse<ProposalReview> {
        self.reviews
            .write()
            .update_review(caller, proposal_id, draft, now)
            .into()
    }

    /// Publish the caller's own review. One-way.
    pub fn publish_review(
        &self,
        caller: &Principal,
        proposal_id: ProposalId,
        now: Timestamp,
    ) -> ApiResponse<ProposalReview> {
        self.reviews.write().publish(caller, proposal_id, now).into()
    }

    /// List reviews by exactly one filter dimension.
    pub fn list_reviews(
        &self,
        caller: &Principal,
        proposal_id: Option<ProposalId>,
        reviewer_id: Option<ProfileId>,
    ) -> ApiResponse<Vec<ProposalReview>> {
        self.reviews
            .read()
            .list_reviews(caller, proposal_id, reviewer_id)
            .into()
    }

    /// Get a single review, subject to visibility rules.
    pub fn get_review(&self, caller: &Principal, review_id: ReviewId) -> ApiResponse<ProposalReview> {
        self.reviews.read().get_review(caller, review_id).into()
    }

    /// Render the caller's own review as the textual report.
    pub fn summarize_review(
        &self,
        caller: &Principal,
        proposal_id: ProposalId,
    ) -> ApiResponse<String> {
        self.reviews.read().summarize(caller, proposal_id).into()
    }

    // =========================================================================
    // Commit assessments
    // =========================================================================

    /// Add a commit assessment to the caller's own review.
    pub fn create_commit_review(
        &self,
        caller: &Principal,
        review_id: ReviewId,
        commit_sha: &str,
        state: CommitState,
        now: Timestamp,
    ) -> ApiResponse<CommitReview> {
        self.reviews
            .write()
            .create_commit_review(caller, review_id, commit_sha, state, now)
            .into()
    }

    /// Replace the state of an existing commit assessment.
    pub fn update_commit_review(
        &self,
        caller: &Principal,
        review_id: ReviewId,
        commit_sha: &str,
        state: CommitState,
        now: Timestamp,
    ) -> ApiResponse<CommitReview> {
        self.reviews
            .write()
            .update_commit_review(caller, review_id, commit_sha, state, now)
            .into()
    }

    /// Delete a commit assessment from the caller's own review.
    pub fn delete_commit_review(
        &self,
        caller: &Principal,
        review_id: ReviewId,
        commit_sha: &str,
    ) -> ApiResponse<()> {
        self.reviews
            .write()
            .delete_commit_review(caller, review_id, commit_sha)
            .into()
    }

    // =========================================================================
    // Verification images
    // =========================================================================

    /// Upload a verification image for the caller's own review. Returns
    /// the generated serving path.
    pub fn upload_image(
        &self,
        caller: &Principal,
        review_id: ReviewId,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResponse<String> {
        self.assets
            .write()
            .upsert_image(caller, review_id, content_type, bytes)
            .into()
    }

    /// Delete a previously uploaded verification image.
    pub fn delete_image(
        &self,
        caller: &Principal,
        review_id: ReviewId,
        path: &str,
    ) -> ApiResponse<()> {
        self.assets.write().delete_image(caller, review_id, path).into()
    }

    /// Serve an asset request with its integrity witness. This is the
    /// one unauthenticated, untyped entry point.
    pub fn handle_asset_request(&self, request: &HttpRequest) -> HttpResponse {
        gateway::handle_request(&self.assets.read(), request)
    }

    /// The public key verifiers use to check witnesses.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.assets.read().identity().verifying_key()
    }
}
