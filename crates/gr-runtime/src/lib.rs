//! # Governance Review Engine Runtime
//!
//! Assembles the subsystem crates into one running engine.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Wiring
//!
//! ```text
//! ProfileDirectory (external) ──> AuthorizationGate
//! GovernanceClient (external) ──> SyncScheduler ──> ProposalStore
//! ProposalStore <── ProposalStoreGuard <── ReviewStore
//! ReviewStore   <── ReviewStoreGuard   <── CertifiedAssetStore
//! ```
//!
//! The [`Engine`] facade owns each store behind a `parking_lot::RwLock`
//! and exposes the outward operations, every result wrapped 1:1 into the
//! `ApiResponse` envelope.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod engine;

pub use adapters::{ProposalStoreGuard, ReviewStoreGuard};
pub use engine::{Engine, EngineConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
