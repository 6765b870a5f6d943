//! # Integrity Witness
//!
//! The proof a response carries in its integrity header. A witness
//! binds the protocol version, the signed tree root, and either an
//! inclusion proof (200) or an absence proof (404) for the requested
//! path.

use super::tree::{Digest, LeafWitness};
use serde::{Deserialize, Serialize};
use shared_types::{EngineError, EngineResult};

/// Fixed protocol version every witness is bound to.
pub const WITNESS_VERSION: u16 = 1;

/// Proof payload of a witness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WitnessProof {
    /// The path is certified with exactly this response digest.
    Inclusion(LeafWitness),
    /// The path is not certified: the adjacent leaves bracket it.
    /// A missing side means the path sorts past that edge of the key
    /// space; both sides missing means the index is empty.
    Absence {
        /// Greatest certified leaf below the path.
        left: Option<LeafWitness>,
        /// Least certified leaf above the path.
        right: Option<LeafWitness>,
    },
}

/// A complete, independently verifiable integrity witness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    /// Protocol version; verifiers reject anything unexpected.
    pub version: u16,
    /// Certification tree root at the time the response was built.
    pub root: Digest,
    /// Number of certified paths under that root.
    pub leaf_count: u64,
    /// Ed25519 signature over `version || leaf_count || root`.
    pub signature: Vec<u8>,
    /// Inclusion or absence proof for the requested path.
    pub proof: WitnessProof,
}

impl Witness {
    /// The byte string the network identity signs.
    pub fn signed_message(version: u16, leaf_count: u64, root: &Digest) -> Vec<u8> {
        let mut msg = Vec::with_capacity(2 + 8 + 32);
        msg.extend_from_slice(&version.to_be_bytes());
        msg.extend_from_slice(&leaf_count.to_be_bytes());
        msg.extend_from_slice(root);
        msg
    }

    /// Encode for the integrity header: JSON, then hex.
    pub fn encode(&self) -> String {
        let json = serde_json::to_vec(self).expect("witness serialization cannot fail");
        hex::encode(json)
    }

    /// Decode a header value produced by [`Witness::encode`].
    pub fn decode(header_value: &str) -> EngineResult<Self> {
        let json = hex::decode(header_value)
            .map_err(|e| EngineError::internal(format!("witness header is not hex: {e}")))?;
        serde_json::from_slice(&json)
            .map_err(|e| EngineError::internal(format!("witness header is not valid: {e}")))
    }
}
