//! # Review Entities
//!
//! The review aggregate: a `ProposalReview` together with its owned
//! `CommitReview` entries and image paths. The aggregate is one
//! consistency boundary; the lock state (proposal completed OR review
//! published) freezes all of it at once.

use serde::{Deserialize, Serialize};
use shared_types::{EngineError, EngineResult, ProfileId, Timestamp};
use std::collections::BTreeMap;

/// Review identifier, assigned at creation.
pub type ReviewId = u64;

/// Proposal identifier (from the proposal subsystem).
pub type ProposalId = u64;

/// Status of a review. Transitions only `Draft -> Published`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    /// Editable by the owning reviewer.
    Draft,
    /// Frozen and visible to everyone. Terminal.
    Published,
}

/// The reviewer's verdict on the proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewVote {
    /// Recommend adoption.
    Adopt,
    /// Recommend rejection.
    Reject,
}

/// A commit hash: 20 bytes, rendered as 40 lowercase hex characters.
///
/// Parsing failures surface as 500-class internal errors, not 400s;
/// downstream clients match on the exact code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommitSha([u8; 20]);

impl CommitSha {
    /// Parse from 40 lowercase hex characters.
    ///
    /// # Errors
    /// - 500 on bad length, uppercase, or non-hex input
    pub fn parse(text: &str) -> EngineResult<Self> {
        if text.len() != 40 {
            return Err(EngineError::internal(format!(
                "malformed commit sha {text:?}: expected 40 hex characters"
            )));
        }
        if text.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(EngineError::internal(format!(
                "malformed commit sha {text:?}: expected lowercase hex"
            )));
        }
        let bytes = hex::decode(text).map_err(|e| {
            EngineError::internal(format!("malformed commit sha {text:?}: {e}"))
        })?;
        let mut out = [0u8; 20];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Full 40-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated 8-character form used in reports.
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl std::fmt::Display for CommitSha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Assessment state of one commit within a review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitState {
    /// Listed but not yet assessed.
    NotReviewed,
    /// Assessed by the reviewer.
    Reviewed {
        /// Whether the commit matches the proposal description.
        matches_description: Option<bool>,
        /// Free-text comment.
        comment: Option<String>,
        /// Notable observations, at most five.
        highlights: Vec<String>,
    },
}

/// One commit's assessment, owned by its parent review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReview {
    /// The commit this entry assesses; unique within the review.
    pub commit_sha: CommitSha,
    /// Assessment state.
    pub state: CommitState,
    /// When the entry was created.
    pub created_at: Timestamp,
    /// When the entry was last updated, if ever.
    pub last_updated_at: Option<Timestamp>,
}

/// A reviewer's assessment of one proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalReview {
    /// Review identifier.
    pub id: ReviewId,
    /// The proposal under review.
    pub proposal_id: ProposalId,
    /// Profile of the owning reviewer.
    pub reviewer_id: ProfileId,
    /// Draft or published.
    pub status: ReviewStatus,
    /// When the review was created.
    pub created_at: Timestamp,
    /// When the review was last updated, if ever.
    pub last_updated_at: Option<Timestamp>,
    /// Free-text summary.
    pub summary: Option<String>,
    /// Time spent reviewing, in minutes.
    pub duration_minutes: Option<u32>,
    /// Whether the reviewer reproduced the build.
    pub build_reproduced: Option<bool>,
    /// The reviewer's verdict.
    pub vote: Option<ReviewVote>,
    /// Commit assessments keyed by commit sha.
    pub commits: BTreeMap<CommitSha, CommitReview>,
    /// Paths of uploaded verification images, in upload order.
    pub image_paths: Vec<String>,
}

impl ProposalReview {
    /// Create a fresh draft.
    pub fn new_draft(
        id: ReviewId,
        proposal_id: ProposalId,
        reviewer_id: ProfileId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            proposal_id,
            reviewer_id,
            status: ReviewStatus::Draft,
            created_at,
            last_updated_at: None,
            summary: None,
            duration_minutes: None,
            build_reproduced: None,
            vote: None,
            commits: BTreeMap::new(),
            image_paths: Vec::new(),
        }
    }

    /// True once published.
    pub fn is_published(&self) -> bool {
        self.status == ReviewStatus::Published
    }
}
