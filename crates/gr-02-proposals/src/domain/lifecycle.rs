//! # Lifecycle Function
//!
//! The review-window state machine as a pure function of time. There is
//! no "complete proposal" message anywhere in the engine; the checker
//! applies this function on every scheduled tick.

use super::entities::ProposalState;
use shared_types::Timestamp;

/// Compute the state a proposal should be in at `now`.
///
/// - A completed proposal stays completed, whatever `now` says.
/// - An open proposal completes once `now - proposed_at >= review_period`.
///
/// Pure: identical inputs always give identical outputs.
pub fn next_state(
    now: Timestamp,
    proposed_at: Timestamp,
    current: ProposalState,
    review_period_secs: u64,
) -> ProposalState {
    if current.is_completed() {
        return current;
    }
    if now.saturating_sub(proposed_at) >= review_period_secs {
        ProposalState::Completed { completed_at: now }
    } else {
        ProposalState::InProgress
    }
}
