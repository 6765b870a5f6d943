//! # Governance Review Engine Test Suite
//!
//! Unified test crate for scenarios that span subsystem boundaries.
//! Per-subsystem unit tests live next to their code; everything here
//! drives the assembled [`gr_runtime::Engine`] the way the presentation
//! layer would.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── sync_flows.rs        # Authority ingestion and lifecycle
//!     ├── review_lifecycle.rs  # Reviews, commits, publish semantics
//!     └── certified_assets.rs  # Image serving and witness checking
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gr-tests
//! cargo test -p gr-tests integration::sync_flows
//! ```

pub mod integration;
