//! # Proposal Domain
//!
//! Entities and the pure lifecycle function.

pub mod entities;
pub mod lifecycle;

pub use entities::{
    ExternalProposalId, Proposal, ProposalId, ProposalState, StateFilter, Topic, ALLOWED_TOPICS,
};
pub use lifecycle::next_state;
