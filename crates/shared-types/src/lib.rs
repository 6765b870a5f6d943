//! # Shared Types Crate
//!
//! Cross-subsystem primitives for the Governance Review Engine.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a subsystem
//!   boundary is defined here.
//! - **Fixed error taxonomy**: all store operations fail with an
//!   [`EngineError`] carrying one of the seven documented codes; the
//!   outward layer maps it 1:1 into the [`ApiResponse`] envelope with no
//!   translation loss.
//! - **Explicit time**: operations that depend on time take a
//!   [`Timestamp`] argument instead of reading a clock, so every state
//!   transition is deterministic and replayable.

pub mod envelope;
pub mod errors;
pub mod principal;

pub use envelope::ApiResponse;
pub use errors::{EngineError, EngineResult};
pub use principal::Principal;

/// Unix timestamp in seconds since the epoch.
pub type Timestamp = u64;

/// Profile identifier assigned by the external profile collaborator.
pub type ProfileId = u64;
