//! # Review Domain
//!
//! Entities and validation rules for the review aggregate.

pub mod entities;
pub mod validation;

pub use entities::{
    CommitReview, CommitSha, CommitState, ProposalReview, ReviewId, ReviewStatus, ReviewVote,
};
pub use validation::{
    ReviewDraft, MAX_COMMENT_CHARS, MAX_DURATION_MINUTES, MAX_HIGHLIGHTS, MAX_HIGHLIGHT_CHARS,
    MAX_SUMMARY_CHARS, MIN_DURATION_MINUTES,
};
