//! # GR-05 Certified Asset Store
//!
//! Content-addressed storage for uploaded verification images, served
//! through a request gateway whose responses carry an independently
//! verifiable integrity witness.
//!
//! **Subsystem ID:** 05
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A third party fetching an image must be able to prove the bytes they
//! received are exactly what the reviewer uploaded, without trusting the
//! serving replica:
//!
//! - every servable path is a leaf in a Merkle tree sorted by path
//! - the tree root is signed by the network identity
//! - a 200 response carries an inclusion witness over exactly that
//!   response
//! - a 404 response carries an absence witness naming the adjacent
//!   leaves, so "this path does not exist" is itself certified
//!
//! The tree is recomputed synchronously inside the same message as every
//! mutation; a reader can never observe a write whose witness has not
//! been committed.
//!
//! ## Module Structure
//!
//! ```text
//! gr-05-certified-assets/
//! ├── domain/          # ReviewImage, certification tree, witness types
//! ├── ports/           # ReviewGuard trait + mock
//! ├── store.rs         # CertifiedAssetStore: upsert/delete + recompute
//! ├── gateway.rs       # HTTP request handling
//! ├── verify.rs        # Standalone witness verification
//! └── config.rs        # AssetConfig (size cap, content types)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod gateway;
pub mod ports;
pub mod store;
pub mod verify;

pub use config::AssetConfig;
pub use domain::{
    response_digest, CertificationIndex, NetworkIdentity, ReviewImage, Witness, WitnessProof,
    IMAGE_PATH_PREFIX, WITNESS_VERSION,
};
pub use gateway::{HttpRequest, HttpResponse, WITNESS_HEADER};
pub use ports::{MockReviewGuard, ReviewGuard};
pub use store::CertifiedAssetStore;
pub use verify::verify_witness;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
