//! # Certification Tree
//!
//! The authenticated structure over all servable paths: a binary Merkle
//! tree whose leaves are sorted by path, with the last node duplicated
//! on odd levels. Sorted leaves make absence provable by adjacency:
//! two neighboring leaves bracketing a missing path are a certified
//! statement that nothing lives between them.
//!
//! The tree is rebuilt in full on every mutation, inside the same
//! message, so no observable state ever has a stale root.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::collections::BTreeMap;
use std::ops::Bound;

/// 32-byte SHA-256 digest.
pub type Digest = [u8; 32];

/// Domain separators for leaf and interior hashing.
const LEAF_TAG: u8 = 0x00;
const NODE_TAG: u8 = 0x01;

/// Root of the empty tree.
pub const EMPTY_ROOT: Digest = [0u8; 32];

/// Which side a sibling hash sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Sibling is the left input of the parent hash.
    Left,
    /// Sibling is the right input of the parent hash.
    Right,
}

/// One step of an audit path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofNode {
    /// Sibling hash at this level.
    pub hash: Digest,
    /// Side the sibling sits on.
    pub position: Position,
}

/// A leaf together with everything needed to check it against the root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafWitness {
    /// The leaf's path.
    pub path: String,
    /// The certified response digest at this path.
    pub digest: Digest,
    /// Leaf index in path order.
    pub index: u64,
    /// Sibling hashes from leaf level to the root.
    pub audit: Vec<ProofNode>,
}

/// Hash a leaf: `SHA256(0x00 || SHA256(path) || digest)`.
pub fn leaf_hash(path: &str, digest: &Digest) -> Digest {
    let path_hash: Digest = Sha256::digest(path.as_bytes()).into();
    let mut hasher = Sha256::new();
    hasher.update([LEAF_TAG]);
    hasher.update(path_hash);
    hasher.update(digest);
    hasher.finalize().into()
}

/// Hash two child nodes: `SHA256(0x01 || left || right)`.
pub fn node_hash(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update([NODE_TAG]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// The certification index: every servable path and its response digest,
/// plus the Merkle levels built over them.
#[derive(Clone, Debug, Default)]
pub struct CertificationIndex {
    entries: BTreeMap<String, Digest>,
    /// `levels[0]` are leaf hashes in path order; the last level is the
    /// root. Empty when there are no entries.
    levels: Vec<Vec<Digest>>,
}

impl CertificationIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a path's digest and rebuild the tree.
    pub fn insert(&mut self, path: String, digest: Digest) {
        self.entries.insert(path, digest);
        self.rebuild();
    }

    /// Remove a path and rebuild the tree. Returns true if it existed.
    pub fn remove(&mut self, path: &str) -> bool {
        let removed = self.entries.remove(path).is_some();
        if removed {
            self.rebuild();
        }
        removed
    }

    /// True if the path is certified.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of certified paths.
    pub fn leaf_count(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Current root, or `EMPTY_ROOT` for an empty index.
    pub fn root(&self) -> Digest {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or(EMPTY_ROOT)
    }

    /// Inclusion witness for a certified path.
    pub fn prove_inclusion(&self, path: &str) -> Option<LeafWitness> {
        let digest = *self.entries.get(path)?;
        let index = self
            .entries
            .range::<str, _>((Bound::Unbounded, Bound::Excluded(path)))
            .count() as u64;
        Some(LeafWitness {
            path: path.to_string(),
            digest,
            index,
            audit: self.audit_path(index as usize),
        })
    }

    /// The certified neighbors bracketing a missing path: the greatest
    /// leaf below it and the least leaf above it, either of which may
    /// not exist at the edges of the key space.
    pub fn prove_absence(&self, path: &str) -> (Option<LeafWitness>, Option<LeafWitness>) {
        debug_assert!(!self.contains(path));
        let left = self
            .entries
            .range::<str, _>((Bound::Unbounded, Bound::Excluded(path)))
            .next_back()
            .map(|(p, _)| p.clone());
        let right = self
            .entries
            .range::<str, _>((Bound::Excluded(path), Bound::Unbounded))
            .next()
            .map(|(p, _)| p.clone());
        (
            left.and_then(|p| self.prove_inclusion(&p)),
            right.and_then(|p| self.prove_inclusion(&p)),
        )
    }

    /// Rebuild every level from the sorted entries.
    fn rebuild(&mut self) {
        self.levels.clear();
        if self.entries.is_empty() {
            return;
        }

        let mut level: Vec<Digest> = self
            .entries
            .iter()
            .map(|(path, digest)| leaf_hash(path, digest))
            .collect();
        self.levels.push(level.clone());

        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for chunk in level.chunks(2) {
                let left = &chunk[0];
                let right = chunk.get(1).unwrap_or(left); // Duplicate last if odd
                next.push(node_hash(left, right));
            }
            self.levels.push(next.clone());
            level = next;
        }
    }

    /// Sibling hashes from leaf `index` up to the root.
    fn audit_path(&self, index: usize) -> Vec<ProofNode> {
        let mut audit = Vec::new();
        let mut idx = index;
        for level in &self.levels {
            if level.len() == 1 {
                break;
            }
            let (sibling, position) = if idx % 2 == 0 {
                // Last element of an odd level pairs with itself
                (*level.get(idx + 1).unwrap_or(&level[idx]), Position::Right)
            } else {
                (level[idx - 1], Position::Left)
            };
            audit.push(ProofNode {
                hash: sibling,
                position,
            });
            idx /= 2;
        }
        audit
    }
}

/// Fold an audit path from a leaf hash up to a root, checking that each
/// step's claimed side matches the claimed index.
///
/// Returns false on any inconsistency between `index`, `leaf_count`,
/// and the audit path shape.
pub fn verify_leaf(leaf: &LeafWitness, root: &Digest, leaf_count: u64) -> bool {
    let mut index = leaf.index as usize;
    let mut count = leaf_count as usize;
    if index >= count {
        return false;
    }

    let mut current = leaf_hash(&leaf.path, &leaf.digest);
    let mut audit = leaf.audit.iter();

    while count > 1 {
        let Some(node) = audit.next() else {
            return false;
        };
        let expected = if index % 2 == 0 {
            Position::Right
        } else {
            Position::Left
        };
        if node.position != expected {
            return false;
        }
        current = match node.position {
            Position::Left => node_hash(&node.hash, &current),
            Position::Right => node_hash(&current, &node.hash),
        };
        index /= 2;
        count = count.div_ceil(2);
    }

    audit.next().is_none() && current == *root
}
