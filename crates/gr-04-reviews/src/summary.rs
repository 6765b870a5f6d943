//! # Review Report
//!
//! Deterministic textual rendering of a review, meant for humans on the
//! other side of the governance forum. Format stability matters more
//! than structure here; change it only deliberately.

use crate::domain::{CommitState, ProposalReview};
use std::fmt::Write;

/// Render the report for one review.
///
/// Lines, in order: proposal reference, one short-sha line per commit,
/// a reproducibility statement, the "hashes match" line, and the
/// free-text summary. Commits render in sha order.
pub fn render_report(review: &ProposalReview) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "review of proposal {}", review.proposal_id);

    let _ = writeln!(out, "commits:");
    if review.commits.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (sha, entry) in &review.commits {
        let verdict = match &entry.state {
            CommitState::NotReviewed => "not reviewed".to_string(),
            CommitState::Reviewed {
                matches_description,
                ..
            } => match matches_description {
                Some(true) => "reviewed, matches description".to_string(),
                Some(false) => "reviewed, does not match description".to_string(),
                None => "reviewed".to_string(),
            },
        };
        let _ = writeln!(out, "  {} {}", sha.short(), verdict);
    }

    let reproduced = match review.build_reproduced {
        Some(true) => "yes",
        Some(false) => "no",
        None => "not attempted",
    };
    let _ = writeln!(out, "build reproduced: {reproduced}");

    let _ = writeln!(out, "hashes match: {}", all_hashes_match(review));

    let _ = writeln!(out, "summary:");
    let _ = write!(out, "{}", review.summary.as_deref().unwrap_or("(none)"));

    out
}

/// True when every reviewed commit was found to match its description
/// and at least one commit was reviewed at all.
fn all_hashes_match(review: &ProposalReview) -> bool {
    let mut saw_reviewed = false;
    for entry in review.commits.values() {
        if let CommitState::Reviewed {
            matches_description,
            ..
        } = &entry.state
        {
            saw_reviewed = true;
            if *matches_description != Some(true) {
                return false;
            }
        }
    }
    saw_reviewed
}
