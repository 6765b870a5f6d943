//! # Review Guard Port
//!
//! The asset store delegates ownership and lock checks, plus image-path
//! bookkeeping, to the review subsystem through this port. The runtime
//! wires it to the real review store.

use shared_types::{EngineError, EngineResult, Principal};
use std::collections::HashMap;
use std::sync::Mutex;

/// Review ownership, lock state, and path bookkeeping - outbound port.
pub trait ReviewGuard: Send + Sync {
    /// Full mutation guard chain for a review: caller is a reviewer,
    /// the review exists, the caller owns it, and neither the proposal
    /// nor the review is locked.
    fn ensure_owned_and_mutable(&self, caller: &Principal, review_id: u64) -> EngineResult<()>;

    /// Record an image path on the review.
    fn record_image_path(&self, review_id: u64, path: &str) -> EngineResult<()>;

    /// Remove an image path from the review.
    fn remove_image_path(&self, review_id: u64, path: &str) -> EngineResult<bool>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

struct MockReview {
    owner: Principal,
    locked: bool,
    paths: Vec<String>,
}

/// In-memory review guard for tests.
#[derive(Default)]
pub struct MockReviewGuard {
    reviews: Mutex<HashMap<u64, MockReview>>,
}

impl MockReviewGuard {
    /// Create an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mutable review owned by `owner`.
    pub fn add_review(&self, review_id: u64, owner: Principal) {
        self.reviews.lock().expect("guard poisoned").insert(
            review_id,
            MockReview {
                owner,
                locked: false,
                paths: Vec::new(),
            },
        );
    }

    /// Lock a review (published, or its proposal completed).
    pub fn lock(&self, review_id: u64) {
        if let Some(review) = self
            .reviews
            .lock()
            .expect("guard poisoned")
            .get_mut(&review_id)
        {
            review.locked = true;
        }
    }

    /// Paths currently recorded on a review.
    pub fn paths(&self, review_id: u64) -> Vec<String> {
        self.reviews
            .lock()
            .expect("guard poisoned")
            .get(&review_id)
            .map(|r| r.paths.clone())
            .unwrap_or_default()
    }
}

impl ReviewGuard for MockReviewGuard {
    fn ensure_owned_and_mutable(&self, caller: &Principal, review_id: u64) -> EngineResult<()> {
        if caller.is_anonymous() {
            return Err(EngineError::Unauthenticated);
        }
        let reviews = self.reviews.lock().expect("guard poisoned");
        let review = reviews
            .get(&review_id)
            .ok_or_else(|| EngineError::not_found(format!("review {review_id}")))?;
        if review.owner != *caller {
            return Err(EngineError::forbidden(format!(
                "review {review_id} belongs to another reviewer"
            )));
        }
        if review.locked {
            return Err(EngineError::conflict(format!(
                "review {review_id} is locked"
            )));
        }
        Ok(())
    }

    fn record_image_path(&self, review_id: u64, path: &str) -> EngineResult<()> {
        let mut reviews = self.reviews.lock().expect("guard poisoned");
        let review = reviews
            .get_mut(&review_id)
            .ok_or_else(|| EngineError::not_found(format!("review {review_id}")))?;
        if !review.paths.iter().any(|p| p == path) {
            review.paths.push(path.to_string());
        }
        Ok(())
    }

    fn remove_image_path(&self, review_id: u64, path: &str) -> EngineResult<bool> {
        let mut reviews = self.reviews.lock().expect("guard poisoned");
        let review = reviews
            .get_mut(&review_id)
            .ok_or_else(|| EngineError::not_found(format!("review {review_id}")))?;
        let before = review.paths.len();
        review.paths.retain(|p| p != path);
        Ok(review.paths.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_guard_chain() {
        let guard = MockReviewGuard::new();
        guard.add_review(1, Principal::new("alice"));

        assert!(guard
            .ensure_owned_and_mutable(&Principal::new("alice"), 1)
            .is_ok());
        assert_eq!(
            guard
                .ensure_owned_and_mutable(&Principal::anonymous(), 1)
                .unwrap_err()
                .code(),
            401
        );
        assert_eq!(
            guard
                .ensure_owned_and_mutable(&Principal::new("bob"), 1)
                .unwrap_err()
                .code(),
            403
        );
        assert_eq!(
            guard
                .ensure_owned_and_mutable(&Principal::new("alice"), 2)
                .unwrap_err()
                .code(),
            404
        );

        guard.lock(1);
        assert_eq!(
            guard
                .ensure_owned_and_mutable(&Principal::new("alice"), 1)
                .unwrap_err()
                .code(),
            409
        );
    }

    #[test]
    fn test_mock_guard_paths() {
        let guard = MockReviewGuard::new();
        guard.add_review(1, Principal::new("alice"));

        guard.record_image_path(1, "/a").unwrap();
        guard.record_image_path(1, "/b").unwrap();
        assert_eq!(guard.paths(1), vec!["/a", "/b"]);

        assert_eq!(guard.remove_image_path(1, "/a"), Ok(true));
        assert_eq!(guard.remove_image_path(1, "/a"), Ok(false));
        assert_eq!(guard.paths(1), vec!["/b"]);
    }
}
