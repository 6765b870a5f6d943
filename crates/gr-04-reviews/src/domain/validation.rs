//! # Validation Rules
//!
//! Field bounds for the review aggregate. All violations here are
//! 400-class errors; commit sha malformation is the one exception and
//! lives with the `CommitSha` type.

use super::entities::{CommitState, ReviewVote};
use serde::{Deserialize, Serialize};
use shared_types::{EngineError, EngineResult};

/// Maximum summary length in characters.
pub const MAX_SUMMARY_CHARS: usize = 1500;
/// Minimum review duration in minutes.
pub const MIN_DURATION_MINUTES: u32 = 1;
/// Maximum review duration in minutes.
pub const MAX_DURATION_MINUTES: u32 = 180;
/// Maximum commit comment length in characters.
pub const MAX_COMMENT_CHARS: usize = 1000;
/// Maximum number of highlights per commit.
pub const MAX_HIGHLIGHTS: usize = 5;
/// Maximum highlight length in characters.
pub const MAX_HIGHLIGHT_CHARS: usize = 100;

/// Caller-supplied fields for creating or updating a review.
///
/// Absent fields are left untouched on update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// Free-text summary.
    pub summary: Option<String>,
    /// Time spent reviewing, in minutes.
    pub duration_minutes: Option<u32>,
    /// Whether the reviewer reproduced the build.
    pub build_reproduced: Option<bool>,
    /// The reviewer's verdict.
    pub vote: Option<ReviewVote>,
}

impl ReviewDraft {
    /// Validate all present fields.
    ///
    /// # Errors
    /// - 400 on an empty or over-long summary
    /// - 400 on an out-of-range duration
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(summary) = &self.summary {
            validate_summary(summary)?;
        }
        if let Some(minutes) = self.duration_minutes {
            validate_duration(minutes)?;
        }
        Ok(())
    }
}

/// Check the review summary bounds.
pub fn validate_summary(summary: &str) -> EngineResult<()> {
    if summary.is_empty() {
        return Err(EngineError::invalid_input("summary must not be empty"));
    }
    let len = summary.chars().count();
    if len > MAX_SUMMARY_CHARS {
        return Err(EngineError::invalid_input(format!(
            "summary is {len} characters, maximum is {MAX_SUMMARY_CHARS}"
        )));
    }
    Ok(())
}

/// Check the review duration bounds.
pub fn validate_duration(minutes: u32) -> EngineResult<()> {
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        return Err(EngineError::invalid_input(format!(
            "duration is {minutes} minutes, allowed range is \
             {MIN_DURATION_MINUTES}-{MAX_DURATION_MINUTES}"
        )));
    }
    Ok(())
}

/// Check a commit assessment's comment and highlight bounds.
pub fn validate_commit_state(state: &CommitState) -> EngineResult<()> {
    let CommitState::Reviewed {
        comment,
        highlights,
        ..
    } = state
    else {
        return Ok(());
    };

    if let Some(comment) = comment {
        if comment.is_empty() {
            return Err(EngineError::invalid_input("comment must not be empty"));
        }
        let len = comment.chars().count();
        if len > MAX_COMMENT_CHARS {
            return Err(EngineError::invalid_input(format!(
                "comment is {len} characters, maximum is {MAX_COMMENT_CHARS}"
            )));
        }
    }

    if highlights.len() > MAX_HIGHLIGHTS {
        return Err(EngineError::invalid_input(format!(
            "{} highlights given, maximum is {MAX_HIGHLIGHTS}",
            highlights.len()
        )));
    }
    for highlight in highlights {
        if highlight.is_empty() {
            return Err(EngineError::invalid_input("highlight must not be empty"));
        }
        let len = highlight.chars().count();
        if len > MAX_HIGHLIGHT_CHARS {
            return Err(EngineError::invalid_input(format!(
                "highlight is {len} characters, maximum is {MAX_HIGHLIGHT_CHARS}"
            )));
        }
    }
    Ok(())
}
