//! # Network Identity
//!
//! The Ed25519 keypair that signs certification roots. On the real
//! network this key belongs to the network, not to any single replica;
//! a verifier holding the public key accepts the same witness no matter
//! which replica served the response.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;

/// Signing identity for certification roots.
pub struct NetworkIdentity {
    signing: SigningKey,
}

impl NetworkIdentity {
    /// Generate a fresh identity from the OS entropy source.
    pub fn generate() -> Self {
        Self {
            signing: SigningKey::generate(&mut OsRng),
        }
    }

    /// Deterministic identity from a seed, for tests and replay.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing: SigningKey::from_bytes(&seed),
        }
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing.sign(message)
    }

    /// The public half, distributed to verifiers.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing.verifying_key()
    }
}

/// Check a signature against a public key.
pub fn verify_signature(key: &VerifyingKey, message: &[u8], signature: &Signature) -> bool {
    key.verify(message, signature).is_ok()
}
