//! # Review Lifecycle Scenarios
//!
//! The full review surface driven through the engine: creation against
//! live proposals, the publish freeze, pair uniqueness, field boundary
//! values, and draft visibility.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use gr_04_reviews::{
        CommitState, ReviewDraft, ReviewVote, MAX_COMMENT_CHARS, MAX_DURATION_MINUTES,
        MAX_HIGHLIGHTS, MAX_HIGHLIGHT_CHARS, MAX_SUMMARY_CHARS,
    };
    use shared_types::Principal;

    const SHA: &str = "47d98477c6c59e570e2220aab433b0943b326ef8";

    fn reviewed(comment: &str) -> CommitState {
        CommitState::Reviewed {
            matches_description: Some(true),
            comment: Some(comment.to_string()),
            highlights: vec!["bumps the release tag".to_string()],
        }
    }

    #[tokio::test]
    async fn test_one_review_per_reviewer_per_proposal() {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;

        engine
            .create_review(&alice(), proposal_id, ReviewDraft::default(), 1_001)
            .unwrap();
        let resp = engine.create_review(&alice(), proposal_id, ReviewDraft::default(), 1_002);
        assert_eq!(resp.err_code(), Some(409));

        // A second reviewer is not affected
        assert!(engine
            .create_review(&bob(), proposal_id, ReviewDraft::default(), 1_003)
            .is_ok());
    }

    #[tokio::test]
    async fn test_no_review_on_completed_proposal() {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;

        // Close the window with a later sync run
        engine.sync_proposals(&admin(), 5_000).await.unwrap();

        let resp = engine.create_review(&alice(), proposal_id, ReviewDraft::default(), 5_001);
        assert_eq!(resp.err_code(), Some(409));
    }

    #[tokio::test]
    async fn test_publish_freezes_the_whole_aggregate() {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;

        let review = engine
            .create_review(&alice(), proposal_id, ReviewDraft::default(), 1_001)
            .unwrap();
        engine
            .create_commit_review(&alice(), review.id, SHA, CommitState::NotReviewed, 1_002)
            .unwrap();
        let image = engine
            .upload_image(&alice(), review.id, "image/png", b"shot".to_vec())
            .unwrap();

        engine.publish_review(&alice(), proposal_id, 1_003).unwrap();

        // Every mutation path now conflicts, including for the owner
        let resp = engine.update_review(&alice(), proposal_id, ReviewDraft::default(), 1_004);
        assert_eq!(resp.err_code(), Some(409));

        let resp = engine.publish_review(&alice(), proposal_id, 1_004);
        assert_eq!(resp.err_code(), Some(409));

        let resp = engine.update_commit_review(
            &alice(),
            review.id,
            SHA,
            reviewed("late edit"),
            1_004,
        );
        assert_eq!(resp.err_code(), Some(409));

        let resp = engine.delete_commit_review(&alice(), review.id, SHA);
        assert_eq!(resp.err_code(), Some(409));

        let resp = engine.upload_image(&alice(), review.id, "image/png", b"more".to_vec());
        assert_eq!(resp.err_code(), Some(409));

        let resp = engine.delete_image(&alice(), review.id, &image);
        assert_eq!(resp.err_code(), Some(409));
    }

    #[tokio::test]
    async fn test_duplicate_commit_conflict_names_review_and_commit() {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;

        let review = engine
            .create_review(&alice(), proposal_id, ReviewDraft::default(), 1_001)
            .unwrap();
        engine
            .create_commit_review(&alice(), review.id, SHA, CommitState::NotReviewed, 1_002)
            .unwrap();

        let resp = engine.create_commit_review(
            &alice(),
            review.id,
            SHA,
            CommitState::NotReviewed,
            1_003,
        );
        match resp {
            shared_types::ApiResponse::Err(e) => {
                assert_eq!(e.code, 409);
                assert!(e.message.contains(&review.id.to_string()));
                assert!(e.message.contains(SHA));
            }
            shared_types::ApiResponse::Ok(_) => panic!("duplicate commit entry must conflict"),
        }
    }

    #[tokio::test]
    async fn test_review_field_boundaries() {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;
        engine
            .create_review(&alice(), proposal_id, ReviewDraft::default(), 1_001)
            .unwrap();

        // Summary: at the cap passes, one char over fails
        let draft = ReviewDraft {
            summary: Some("s".repeat(MAX_SUMMARY_CHARS)),
            ..Default::default()
        };
        assert!(engine.update_review(&alice(), proposal_id, draft, 1_002).is_ok());

        let draft = ReviewDraft {
            summary: Some("s".repeat(MAX_SUMMARY_CHARS + 1)),
            ..Default::default()
        };
        let resp = engine.update_review(&alice(), proposal_id, draft, 1_003);
        assert_eq!(resp.err_code(), Some(400));

        // Duration: the inclusive range is [1, 180]
        for (minutes, ok) in [(0, false), (1, true), (180, true), (181, false)] {
            let draft = ReviewDraft {
                duration_minutes: Some(minutes),
                ..Default::default()
            };
            let resp = engine.update_review(&alice(), proposal_id, draft, 1_004);
            assert_eq!(resp.is_ok(), ok, "duration {minutes}");
        }
    }

    #[tokio::test]
    async fn test_commit_field_boundaries() {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;
        let review = engine
            .create_review(&alice(), proposal_id, ReviewDraft::default(), 1_001)
            .unwrap();

        // Comment at the cap passes
        let state = reviewed(&"c".repeat(MAX_COMMENT_CHARS));
        assert!(engine
            .create_commit_review(&alice(), review.id, SHA, state, 1_002)
            .is_ok());

        // One char over fails
        let state = reviewed(&"c".repeat(MAX_COMMENT_CHARS + 1));
        let resp = engine.update_commit_review(&alice(), review.id, SHA, state, 1_003);
        assert_eq!(resp.err_code(), Some(400));

        // Highlight count cap
        let state = CommitState::Reviewed {
            matches_description: None,
            comment: None,
            highlights: vec!["h".to_string(); MAX_HIGHLIGHTS + 1],
        };
        let resp = engine.update_commit_review(&alice(), review.id, SHA, state, 1_004);
        assert_eq!(resp.err_code(), Some(400));

        // Individual highlight length cap
        let state = CommitState::Reviewed {
            matches_description: None,
            comment: None,
            highlights: vec!["h".repeat(MAX_HIGHLIGHT_CHARS + 1)],
        };
        let resp = engine.update_commit_review(&alice(), review.id, SHA, state, 1_005);
        assert_eq!(resp.err_code(), Some(400));

        // At both caps passes
        let state = CommitState::Reviewed {
            matches_description: Some(false),
            comment: None,
            highlights: vec!["h".repeat(MAX_HIGHLIGHT_CHARS); MAX_HIGHLIGHTS],
        };
        assert!(engine
            .update_commit_review(&alice(), review.id, SHA, state, 1_006)
            .is_ok());
    }

    #[tokio::test]
    async fn test_published_review_is_visible_to_every_viewer() {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;

        let review = engine
            .create_review(
                &alice(),
                proposal_id,
                ReviewDraft {
                    summary: Some("thorough audit".to_string()),
                    vote: Some(ReviewVote::Adopt),
                    ..Default::default()
                },
                1_001,
            )
            .unwrap();
        engine
            .create_commit_review(&alice(), review.id, SHA, reviewed("clean diff"), 1_002)
            .unwrap();

        // While a draft, only the owner and the admin can see it
        assert_eq!(
            engine.get_review(&bob(), review.id).err_code(),
            Some(404)
        );
        assert!(engine.get_review(&admin(), review.id).is_ok());
        assert!(engine
            .list_reviews(&Principal::anonymous(), Some(proposal_id), None)
            .unwrap()
            .is_empty());

        engine.publish_review(&alice(), proposal_id, 1_003).unwrap();

        // Published: another reviewer, the owner, and anonymous all see
        // it with its commit entries, by proposal and by reviewer
        for caller in [bob(), alice(), Principal::anonymous()] {
            let listed = engine
                .list_reviews(&caller, Some(proposal_id), None)
                .unwrap();
            assert_eq!(listed.len(), 1, "caller {caller}");
            assert_eq!(listed[0].commits.len(), 1);

            let listed = engine.list_reviews(&caller, None, Some(1)).unwrap();
            assert_eq!(listed.len(), 1);

            assert!(engine.get_review(&caller, review.id).is_ok());
        }
    }

    #[tokio::test]
    async fn test_summary_report_through_engine() {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;

        let review = engine
            .create_review(
                &alice(),
                proposal_id,
                ReviewDraft {
                    summary: Some("looks good".to_string()),
                    build_reproduced: Some(true),
                    ..Default::default()
                },
                1_001,
            )
            .unwrap();
        engine
            .create_commit_review(&alice(), review.id, SHA, reviewed("ok"), 1_002)
            .unwrap();

        let report = engine.summarize_review(&alice(), proposal_id).unwrap();
        assert!(report.contains(&format!("proposal {proposal_id}")));
        assert!(report.contains("47d98477"));
        assert!(report.contains("build reproduced: yes"));
        assert!(report.contains("looks good"));

        // Only the author can ask for their report
        let resp = engine.summarize_review(&bob(), proposal_id);
        assert_eq!(resp.err_code(), Some(404));
    }
}
