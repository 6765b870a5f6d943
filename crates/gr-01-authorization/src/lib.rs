//! # GR-01 Authorization Gate
//!
//! Caller role resolution and policy checks for the Governance Review
//! Engine.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! Resolve a caller principal to one of three roles through the external
//! profile collaborator, and enforce the three-tier access distinction
//! every other subsystem relies on:
//!
//! | Tier | Condition | Failure |
//! |------|-----------|---------|
//! | Unauthenticated | caller is the anonymous principal | 401 before any profile lookup |
//! | No profile | authenticated but unknown to the profile collaborator | 404 |
//! | Wrong role | has a profile but not the required role | 403 |
//!
//! The gate is pure policy: it holds no state of its own beyond a handle
//! to the profile directory.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gate;
pub mod ports;
pub mod role;

pub use gate::AuthorizationGate;
pub use ports::{MockProfileDirectory, ProfileDirectory};
pub use role::Role;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
