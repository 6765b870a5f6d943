//! # GR-02 Proposal Store
//!
//! Ingested governance proposals and their review-window lifecycle.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD, domain + store)
//!
//! ## Purpose
//!
//! Hold every proposal ingested from the external governance authority
//! and run the time-derived lifecycle state machine over them:
//!
//! - `InProgress` while the review window is open
//! - `Completed` once `now - proposed_at >= review_period`, permanently
//!
//! The transition is a pure function of time; no external call can force
//! it, which makes every transition deterministic and replayable.
//!
//! ## Module Structure
//!
//! ```text
//! gr-02-proposals/
//! ├── domain/          # Proposal, Topic allow-list, lifecycle function
//! ├── store.rs         # ProposalStore: upsert, list, lifecycle check
//! └── config.rs        # ProposalConfig (review period)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod store;

pub use config::ProposalConfig;
pub use domain::{
    next_state, ExternalProposalId, Proposal, ProposalId, ProposalState, StateFilter, Topic,
    ALLOWED_TOPICS,
};
pub use store::{NewProposal, ProposalStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
