//! # Certified Asset Scenarios
//!
//! Image round-trips through the engine, checked end-to-end the way an
//! external verifier would: recompute the response digest from the bytes
//! actually received and validate the witness against the network's
//! public key.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use gr_04_reviews::ReviewDraft;
    use gr_05_certified_assets::{
        response_digest, verify_witness, HttpRequest, Witness, WITNESS_HEADER,
    };
    use rand::RngCore;

    async fn engine_with_review() -> (gr_runtime::Engine, u64) {
        let (engine, governance) = make_engine();
        let proposal_id = sync_one_proposal(&engine, &governance, 1_000).await;
        let review = engine
            .create_review(&alice(), proposal_id, ReviewDraft::default(), 1_001)
            .unwrap();
        (engine, review.id)
    }

    fn get(path: &str) -> HttpRequest {
        HttpRequest {
            method: "GET".to_string(),
            path: path.to_string(),
        }
    }

    #[tokio::test]
    async fn test_round_trip_is_byte_identical_and_certified() {
        let (engine, review_id) = engine_with_review().await;

        let mut bytes = vec![0u8; 512];
        rand::thread_rng().fill_bytes(&mut bytes);

        let path = engine
            .upload_image(&alice(), review_id, "image/webp", bytes.clone())
            .unwrap();

        let response = engine.handle_asset_request(&get(&path));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, bytes);
        assert_eq!(response.header("content-type"), Some("image/webp"));
        assert_eq!(response.header("content-length"), Some("512"));

        let witness = Witness::decode(response.header(WITNESS_HEADER).unwrap()).unwrap();
        let digest = response_digest(200, "image/webp", &response.body);
        assert!(verify_witness(
            &engine.verifying_key(),
            &path,
            Some(digest),
            &witness
        ));
    }

    #[tokio::test]
    async fn test_deleted_image_serves_certified_absence() {
        let (engine, review_id) = engine_with_review().await;

        let path = engine
            .upload_image(&alice(), review_id, "image/png", b"gone soon".to_vec())
            .unwrap();

        let before = engine.handle_asset_request(&get(&path));
        let stale = Witness::decode(before.header(WITNESS_HEADER).unwrap()).unwrap();

        engine.delete_image(&alice(), review_id, &path).unwrap();

        let response = engine.handle_asset_request(&get(&path));
        assert_eq!(response.status_code, 404);

        let witness = Witness::decode(response.header(WITNESS_HEADER).unwrap()).unwrap();
        assert!(verify_witness(
            &engine.verifying_key(),
            &path,
            None,
            &witness
        ));

        // The deletion moved the tree root; a verifier tracking the
        // current root can tell the pre-deletion witness is stale
        assert_ne!(stale.root, witness.root);
    }

    #[tokio::test]
    async fn test_only_get_is_served() {
        let (engine, _) = engine_with_review().await;

        for method in ["POST", "PUT", "DELETE"] {
            let response = engine.handle_asset_request(&HttpRequest {
                method: method.to_string(),
                path: "/images/reviews/anything".to_string(),
            });
            assert_eq!(response.status_code, 405, "method {method}");
            assert!(response.header(WITNESS_HEADER).is_none());
        }
    }

    #[tokio::test]
    async fn test_upload_constraints() {
        let (engine, review_id) = engine_with_review().await;

        let resp = engine.upload_image(&alice(), review_id, "application/pdf", b"x".to_vec());
        assert_eq!(resp.err_code(), Some(400));

        // Testing cap is 1 KiB
        let resp = engine.upload_image(&alice(), review_id, "image/png", vec![0u8; 1025]);
        assert_eq!(resp.err_code(), Some(400));

        // A foreign reviewer cannot attach images to this review
        let resp = engine.upload_image(&bob(), review_id, "image/png", b"x".to_vec());
        assert_eq!(resp.err_code(), Some(403));
    }

    #[tokio::test]
    async fn test_each_upload_gets_a_fresh_unguessable_path() {
        let (engine, review_id) = engine_with_review().await;

        let a = engine
            .upload_image(&alice(), review_id, "image/png", b"one".to_vec())
            .unwrap();
        let b = engine
            .upload_image(&alice(), review_id, "image/png", b"one".to_vec())
            .unwrap();
        assert_ne!(a, b);

        // Both are independently certified and servable
        for path in [&a, &b] {
            let response = engine.handle_asset_request(&get(path));
            assert_eq!(response.status_code, 200);
        }
    }
}
