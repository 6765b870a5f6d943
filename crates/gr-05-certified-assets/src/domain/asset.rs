//! # Review Image
//!
//! An uploaded verification image, owned by exactly one review.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// Namespace under which all image paths are generated.
pub const IMAGE_PATH_PREFIX: &str = "/images/reviews/";

/// An uploaded verification image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewImage {
    /// Generated, unguessable serving path.
    pub path: String,
    /// The owning review.
    pub review_id: u64,
    /// MIME type from the upload.
    pub content_type: String,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

/// Digest binding a response exactly: status code, content type, body.
///
/// This is the value certified for the response's path; a verifier
/// recomputes it from the response they actually received.
pub fn response_digest(status_code: u16, content_type: &str, body: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(status_code.to_be_bytes());
    hasher.update((content_type.len() as u64).to_be_bytes());
    hasher.update(content_type.as_bytes());
    hasher.update((body.len() as u64).to_be_bytes());
    hasher.update(body);
    hasher.finalize().into()
}
