//! # Witness Verification
//!
//! The independent verifier: everything here works from the network's
//! public key and the response actually received, with no access to the
//! serving store. Any replica's answer must verify identically.

use crate::domain::identity::verify_signature;
use crate::domain::tree::{verify_leaf, Digest, LeafWitness};
use crate::domain::witness::{Witness, WitnessProof, WITNESS_VERSION};
use ed25519_dalek::{Signature, VerifyingKey};

/// Verify a witness against a path and the digest of the response the
/// caller received.
///
/// Pass `Some(digest)` for a 200 response (expects an inclusion proof
/// over exactly that digest) and `None` for a 404 (expects an absence
/// proof). Returns false on any mismatch: version, signature, proof
/// shape, path ordering, or adjacency.
pub fn verify_witness(
    public_key: &VerifyingKey,
    path: &str,
    response_digest: Option<Digest>,
    witness: &Witness,
) -> bool {
    if witness.version != WITNESS_VERSION {
        return false;
    }

    let message = Witness::signed_message(witness.version, witness.leaf_count, &witness.root);
    let Ok(signature) = Signature::from_slice(&witness.signature) else {
        return false;
    };
    if !verify_signature(public_key, &message, &signature) {
        return false;
    }

    match (&witness.proof, response_digest) {
        (WitnessProof::Inclusion(leaf), Some(digest)) => {
            leaf.path == path
                && leaf.digest == digest
                && verify_leaf(leaf, &witness.root, witness.leaf_count)
        }
        (WitnessProof::Absence { left, right }, None) => {
            verify_absence(path, left.as_ref(), right.as_ref(), witness)
        }
        _ => false,
    }
}

/// Check an absence proof: the neighbors must verify against the signed
/// root, bracket the path in sort order, and be adjacent in the tree.
fn verify_absence(
    path: &str,
    left: Option<&LeafWitness>,
    right: Option<&LeafWitness>,
    witness: &Witness,
) -> bool {
    match (left, right) {
        // Empty index: absence is proven by the signed zero count
        (None, None) => witness.leaf_count == 0,
        // Path sorts after the last leaf
        (Some(l), None) => {
            l.path.as_str() < path
                && l.index + 1 == witness.leaf_count
                && verify_leaf(l, &witness.root, witness.leaf_count)
        }
        // Path sorts before the first leaf
        (None, Some(r)) => {
            path < r.path.as_str()
                && r.index == 0
                && verify_leaf(r, &witness.root, witness.leaf_count)
        }
        // Path falls in the gap between two adjacent leaves
        (Some(l), Some(r)) => {
            l.path.as_str() < path
                && path < r.path.as_str()
                && r.index == l.index + 1
                && verify_leaf(l, &witness.root, witness.leaf_count)
                && verify_leaf(r, &witness.root, witness.leaf_count)
        }
    }
}
