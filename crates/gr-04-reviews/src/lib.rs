//! # GR-04 Review Store
//!
//! Per-reviewer proposal reviews with nested commit assessments.
//!
//! **Subsystem ID:** 04
//! **Architecture:** Hexagonal (DDD, domain + store + ports)
//!
//! ## Purpose
//!
//! Own the review aggregate: one `ProposalReview` per
//! `(proposal, reviewer)` pair, each holding its `CommitReview` entries
//! and image paths as a single consistency boundary.
//!
//! Every operation enforces the same guard chain, in order:
//!
//! 1. authorization (gate)
//! 2. existence (proposal, review, commit)
//! 3. lock state (proposal completed OR review published)
//! 4. field validation
//!
//! Publishing is one-way. Once a review is published, or its proposal
//! completes, the aggregate and everything nested in it is immutable.
//!
//! ## Module Structure
//!
//! ```text
//! gr-04-reviews/
//! ├── domain/          # Review entities, commit sha, validation limits
//! ├── ports/           # ProposalGuard trait + mock
//! ├── store.rs         # ReviewStore: CRUD, publish, listing visibility
//! └── summary.rs       # Deterministic textual report
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod store;
pub mod summary;

pub use domain::{
    CommitReview, CommitSha, CommitState, ProposalReview, ReviewDraft, ReviewId, ReviewStatus,
    ReviewVote, MAX_COMMENT_CHARS, MAX_HIGHLIGHTS, MAX_HIGHLIGHT_CHARS, MAX_SUMMARY_CHARS,
    MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
pub use ports::{MockProposalGuard, ProposalGuard};
pub use store::{ReviewFilter, ReviewStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
