//! # Certified Asset Domain
//!
//! Image entity, certification tree, witness types, and the network
//! identity that signs tree roots.

pub mod asset;
pub mod identity;
pub mod tree;
pub mod witness;

pub use asset::{response_digest, ReviewImage, IMAGE_PATH_PREFIX};
pub use identity::NetworkIdentity;
pub use tree::{CertificationIndex, Digest, LeafWitness, Position, ProofNode};
pub use witness::{Witness, WitnessProof, WITNESS_VERSION};
