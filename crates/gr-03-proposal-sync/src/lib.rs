//! # GR-03 Proposal Sync Scheduler
//!
//! Paginated ingestion of proposals from the external governance
//! authority.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! Drain the authority's backlog of proposals matching the engine's
//! topic allow-list, page by page, and upsert every item into the
//! proposal store. A run stops on the first short page, which bounds
//! per-invocation work while still draining an arbitrarily large backlog
//! across repeated invocations.
//!
//! Calls to the authority are the engine's only suspension points, so
//! other messages may interleave with a running sync. Two rules keep
//! that safe:
//!
//! - `upsert` is independently idempotent and order-insensitive
//! - overlapping runs are excluded by an explicit busy flag, not by
//!   construction
//!
//! ## Module Structure
//!
//! ```text
//! gr-03-proposal-sync/
//! ├── domain/          # SyncOutcome
//! ├── ports/           # GovernanceClient trait + mock
//! ├── service.rs       # SyncScheduler: manual sync, timer tick
//! └── config.rs        # SyncConfig (page size, interval)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::SyncConfig;
pub use domain::SyncOutcome;
pub use ports::{GovernanceClient, MockGovernanceClient};
pub use service::SyncScheduler;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
