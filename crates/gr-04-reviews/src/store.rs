//! # Review Store
//!
//! In-memory store for review aggregates. One review per
//! `(proposal, reviewer)` pair; commit entries and image paths live
//! inside their parent review and share its lock state.

use crate::domain::entities::ProposalId;
use crate::domain::validation::validate_commit_state;
use crate::domain::{
    CommitReview, CommitSha, CommitState, ProposalReview, ReviewDraft, ReviewId, ReviewStatus,
};
use crate::ports::ProposalGuard;
use gr_01_authorization::{AuthorizationGate, Role};
use shared_types::{EngineError, EngineResult, Principal, ProfileId, Timestamp};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Parsed listing filter: exactly one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewFilter {
    /// All reviews of one proposal.
    ByProposal(ProposalId),
    /// All reviews written by one reviewer.
    ByReviewer(ProfileId),
}

impl ReviewFilter {
    /// Build from the two optional caller arguments.
    ///
    /// # Errors
    /// - 400 if neither or both are given
    pub fn from_options(
        proposal_id: Option<ProposalId>,
        reviewer_id: Option<ProfileId>,
    ) -> EngineResult<Self> {
        match (proposal_id, reviewer_id) {
            (Some(p), None) => Ok(Self::ByProposal(p)),
            (None, Some(r)) => Ok(Self::ByReviewer(r)),
            (None, None) => Err(EngineError::invalid_input(
                "specify one of proposal_id or reviewer_id",
            )),
            (Some(_), Some(_)) => Err(EngineError::invalid_input(
                "specify either proposal_id or reviewer_id, not both",
            )),
        }
    }
}

/// In-memory review store.
pub struct ReviewStore {
    gate: AuthorizationGate,
    proposals: Arc<dyn ProposalGuard>,
    reviews: BTreeMap<ReviewId, ProposalReview>,
    by_pair: HashMap<(ProposalId, ProfileId), ReviewId>,
    next_id: ReviewId,
}

impl ReviewStore {
    /// Create an empty store.
    pub fn new(gate: AuthorizationGate, proposals: Arc<dyn ProposalGuard>) -> Self {
        Self {
            gate,
            proposals,
            reviews: BTreeMap::new(),
            by_pair: HashMap::new(),
            next_id: 1,
        }
    }

    // =========================================================================
    // Review operations
    // =========================================================================

    /// Create a draft review for a proposal.
    ///
    /// Guard order: authorization, proposal existence, lock state, field
    /// validation, pair uniqueness.
    pub fn create_review(
        &mut self,
        caller: &Principal,
        proposal_id: ProposalId,
        draft: ReviewDraft,
        now: Timestamp,
    ) -> EngineResult<ProposalReview> {
        let reviewer_id = self.gate.require_reviewer(caller)?;
        self.ensure_proposal_open(proposal_id)?;
        draft.validate()?;

        if self.by_pair.contains_key(&(proposal_id, reviewer_id)) {
            return Err(EngineError::conflict(format!(
                "a review of proposal {proposal_id} by reviewer {reviewer_id} already exists"
            )));
        }

        let id = self.next_id;
        self.next_id += 1;

        let mut review = ProposalReview::new_draft(id, proposal_id, reviewer_id, now);
        apply_draft(&mut review, draft);

        self.by_pair.insert((proposal_id, reviewer_id), id);
        self.reviews.insert(id, review.clone());
        tracing::info!(review_id = id, proposal_id, "created review draft");
        Ok(review)
    }

    /// Update the caller's own draft review of a proposal.
    ///
    /// Absent draft fields are left untouched.
    pub fn update_review(
        &mut self,
        caller: &Principal,
        proposal_id: ProposalId,
        draft: ReviewDraft,
        now: Timestamp,
    ) -> EngineResult<ProposalReview> {
        let reviewer_id = self.gate.require_reviewer(caller)?;
        let locked = self.proposals.is_locked(proposal_id)?;
        let id = self.pair_review_id(proposal_id, reviewer_id)?;

        if locked {
            return Err(proposal_completed(proposal_id));
        }
        let review = self.reviews.get(&id).expect("pair index out of sync");
        if review.is_published() {
            return Err(review_published(id));
        }
        draft.validate()?;

        let review = self.reviews.get_mut(&id).expect("pair index out of sync");
        apply_draft(review, draft);
        review.last_updated_at = Some(now);
        Ok(review.clone())
    }

    /// Publish the caller's own review. One-way.
    pub fn publish(
        &mut self,
        caller: &Principal,
        proposal_id: ProposalId,
        now: Timestamp,
    ) -> EngineResult<ProposalReview> {
        let reviewer_id = self.gate.require_reviewer(caller)?;
        let locked = self.proposals.is_locked(proposal_id)?;
        let id = self.pair_review_id(proposal_id, reviewer_id)?;

        if locked {
            return Err(proposal_completed(proposal_id));
        }
        let review = self.reviews.get_mut(&id).expect("pair index out of sync");
        if review.is_published() {
            return Err(review_published(id));
        }

        review.status = ReviewStatus::Published;
        review.last_updated_at = Some(now);
        tracing::info!(review_id = id, proposal_id, "published review");
        Ok(review.clone())
    }

    /// List reviews by exactly one filter dimension.
    ///
    /// Anonymous callers and other reviewers see only published reviews;
    /// the owning reviewer additionally sees their own drafts; admins
    /// see everything. Sorted by `created_at` descending.
    pub fn list_reviews(
        &self,
        caller: &Principal,
        proposal_id: Option<ProposalId>,
        reviewer_id: Option<ProfileId>,
    ) -> EngineResult<Vec<ProposalReview>> {
        let filter = ReviewFilter::from_options(proposal_id, reviewer_id)?;
        let viewer = self.gate.resolve(caller);

        let mut out: Vec<ProposalReview> = self
            .reviews
            .values()
            .filter(|r| match filter {
                ReviewFilter::ByProposal(p) => r.proposal_id == p,
                ReviewFilter::ByReviewer(rev) => r.reviewer_id == rev,
            })
            .filter(|r| visible_to(r, viewer))
            .cloned()
            .collect();
        out.sort_by_key(|r| std::cmp::Reverse(r.created_at));
        Ok(out)
    }

    /// Get a single review, subject to the listing visibility rules.
    ///
    /// An invisible draft is indistinguishable from a missing review.
    pub fn get_review(
        &self,
        caller: &Principal,
        review_id: ReviewId,
    ) -> EngineResult<ProposalReview> {
        let viewer = self.gate.resolve(caller);
        self.reviews
            .get(&review_id)
            .filter(|r| visible_to(r, viewer))
            .cloned()
            .ok_or_else(|| EngineError::not_found(format!("review {review_id}")))
    }

    // =========================================================================
    // Commit operations
    // =========================================================================

    /// Add a commit assessment to the caller's own review.
    pub fn create_commit_review(
        &mut self,
        caller: &Principal,
        review_id: ReviewId,
        commit_sha: &str,
        state: CommitState,
        now: Timestamp,
    ) -> EngineResult<CommitReview> {
        self.ensure_owned_and_mutable(caller, review_id)?;
        let sha = CommitSha::parse(commit_sha)?;
        validate_commit_state(&state)?;

        let review = self.reviews.get_mut(&review_id).expect("checked above");
        if review.commits.contains_key(&sha) {
            return Err(EngineError::conflict(format!(
                "a commit review for review {review_id} and commit {sha} already exists"
            )));
        }

        let entry = CommitReview {
            commit_sha: sha,
            state,
            created_at: now,
            last_updated_at: None,
        };
        review.commits.insert(sha, entry.clone());
        Ok(entry)
    }

    /// Replace the state of an existing commit assessment.
    pub fn update_commit_review(
        &mut self,
        caller: &Principal,
        review_id: ReviewId,
        commit_sha: &str,
        state: CommitState,
        now: Timestamp,
    ) -> EngineResult<CommitReview> {
        self.ensure_owned_and_mutable(caller, review_id)?;
        let sha = CommitSha::parse(commit_sha)?;
        validate_commit_state(&state)?;

        let review = self.reviews.get_mut(&review_id).expect("checked above");
        let entry = review.commits.get_mut(&sha).ok_or_else(|| {
            EngineError::not_found(format!("commit {sha} in review {review_id}"))
        })?;

        // Full replace of the state value
        entry.state = state;
        entry.last_updated_at = Some(now);
        Ok(entry.clone())
    }

    /// Delete a commit assessment from the caller's own review.
    pub fn delete_commit_review(
        &mut self,
        caller: &Principal,
        review_id: ReviewId,
        commit_sha: &str,
    ) -> EngineResult<()> {
        self.ensure_owned_and_mutable(caller, review_id)?;
        let sha = CommitSha::parse(commit_sha)?;

        let review = self.reviews.get_mut(&review_id).expect("checked above");
        review.commits.remove(&sha).ok_or_else(|| {
            EngineError::not_found(format!("commit {sha} in review {review_id}"))
        })?;
        Ok(())
    }

    // =========================================================================
    // Aggregate guards and image-path bookkeeping (asset subsystem hooks)
    // =========================================================================

    /// Check the full mutation guard chain for a review: caller is a
    /// reviewer, the review exists, the caller owns it, and neither the
    /// proposal nor the review is locked.
    pub fn ensure_owned_and_mutable(
        &self,
        caller: &Principal,
        review_id: ReviewId,
    ) -> EngineResult<()> {
        let reviewer_id = self.gate.require_reviewer(caller)?;
        let review = self
            .reviews
            .get(&review_id)
            .ok_or_else(|| EngineError::not_found(format!("review {review_id}")))?;

        if review.reviewer_id != reviewer_id {
            return Err(EngineError::forbidden(format!(
                "review {review_id} belongs to another reviewer"
            )));
        }
        if self.proposals.is_locked(review.proposal_id)? {
            return Err(proposal_completed(review.proposal_id));
        }
        if review.is_published() {
            return Err(review_published(review_id));
        }
        Ok(())
    }

    /// Append an image path to a review. Caller guards must already have
    /// passed; this is bookkeeping only.
    pub fn record_image_path(&mut self, review_id: ReviewId, path: &str) -> EngineResult<()> {
        let review = self
            .reviews
            .get_mut(&review_id)
            .ok_or_else(|| EngineError::not_found(format!("review {review_id}")))?;
        if !review.image_paths.iter().any(|p| p == path) {
            review.image_paths.push(path.to_string());
        }
        Ok(())
    }

    /// Remove an image path from a review. Returns true if it was
    /// present.
    pub fn remove_image_path(&mut self, review_id: ReviewId, path: &str) -> EngineResult<bool> {
        let review = self
            .reviews
            .get_mut(&review_id)
            .ok_or_else(|| EngineError::not_found(format!("review {review_id}")))?;
        let before = review.image_paths.len();
        review.image_paths.retain(|p| p != path);
        Ok(review.image_paths.len() != before)
    }

    /// Render the caller's own review as the deterministic textual
    /// report.
    pub fn summarize(&self, caller: &Principal, proposal_id: ProposalId) -> EngineResult<String> {
        let reviewer_id = self.gate.require_reviewer(caller)?;
        // Existence of the proposal is implied by the review lookup
        let id = self.pair_review_id(proposal_id, reviewer_id)?;
        let review = self.reviews.get(&id).expect("pair index out of sync");
        Ok(crate::summary::render_report(review))
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn ensure_proposal_open(&self, proposal_id: ProposalId) -> EngineResult<()> {
        if self.proposals.is_locked(proposal_id)? {
            return Err(proposal_completed(proposal_id));
        }
        Ok(())
    }

    fn pair_review_id(
        &self,
        proposal_id: ProposalId,
        reviewer_id: ProfileId,
    ) -> EngineResult<ReviewId> {
        self.by_pair
            .get(&(proposal_id, reviewer_id))
            .copied()
            .ok_or_else(|| {
                EngineError::not_found(format!(
                    "no review of proposal {proposal_id} by reviewer {reviewer_id}"
                ))
            })
    }
}

/// Apply present draft fields onto a review.
fn apply_draft(review: &mut ProposalReview, draft: ReviewDraft) {
    if draft.summary.is_some() {
        review.summary = draft.summary;
    }
    if draft.duration_minutes.is_some() {
        review.duration_minutes = draft.duration_minutes;
    }
    if draft.build_reproduced.is_some() {
        review.build_reproduced = draft.build_reproduced;
    }
    if draft.vote.is_some() {
        review.vote = draft.vote;
    }
}

/// Listing visibility: published is public; drafts are visible to their
/// owner and to admins.
fn visible_to(review: &ProposalReview, viewer: Option<Role>) -> bool {
    if review.is_published() {
        return true;
    }
    match viewer {
        Some(Role::Admin(_)) => true,
        Some(Role::Reviewer(id)) => review.reviewer_id == id,
        _ => false,
    }
}

fn proposal_completed(proposal_id: ProposalId) -> EngineError {
    EngineError::conflict(format!("proposal {proposal_id} is completed"))
}

fn review_published(review_id: ReviewId) -> EngineError {
    EngineError::conflict(format!("review {review_id} is published"))
}
