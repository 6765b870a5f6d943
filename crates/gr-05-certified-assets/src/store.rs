//! # Certified Asset Store
//!
//! Owns the uploaded images and the certification index over their
//! serving paths. Every mutation recomputes the tree before returning,
//! so the signed root observable after the call already covers the new
//! state.

use crate::config::{AssetConfig, ALLOWED_CONTENT_TYPES};
use crate::domain::asset::{response_digest, ReviewImage, IMAGE_PATH_PREFIX};
use crate::domain::identity::NetworkIdentity;
use crate::domain::tree::CertificationIndex;
use crate::ports::ReviewGuard;
use shared_types::{EngineError, EngineResult, Principal};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Image storage plus the certification index over serving paths.
pub struct CertifiedAssetStore {
    config: AssetConfig,
    reviews: Arc<dyn ReviewGuard>,
    identity: NetworkIdentity,
    assets: HashMap<String, ReviewImage>,
    index: CertificationIndex,
}

impl CertifiedAssetStore {
    /// Create an empty store.
    pub fn new(config: AssetConfig, reviews: Arc<dyn ReviewGuard>, identity: NetworkIdentity) -> Self {
        Self {
            config,
            reviews,
            identity,
            assets: HashMap::new(),
            index: CertificationIndex::new(),
        }
    }

    /// Upload a verification image for a review. Returns the generated
    /// serving path.
    ///
    /// The caller must own the review and the review must still be
    /// mutable; the content type must be an allowed image type and the
    /// payload must fit the configured cap.
    pub fn upsert_image(
        &mut self,
        caller: &Principal,
        review_id: u64,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> EngineResult<String> {
        self.reviews.ensure_owned_and_mutable(caller, review_id)?;
        validate_upload(&self.config, content_type, &bytes)?;

        let path = format!("{IMAGE_PATH_PREFIX}{}", Uuid::new_v4());
        let digest = response_digest(200, content_type, &bytes);
        self.assets.insert(
            path.clone(),
            ReviewImage {
                path: path.clone(),
                review_id,
                content_type: content_type.to_string(),
                bytes,
            },
        );
        self.index.insert(path.clone(), digest);
        self.reviews.record_image_path(review_id, &path)?;

        info!(review_id, path = %path, "stored verification image");
        Ok(path)
    }

    /// Delete a previously uploaded image.
    pub fn delete_image(
        &mut self,
        caller: &Principal,
        review_id: u64,
        path: &str,
    ) -> EngineResult<()> {
        self.reviews.ensure_owned_and_mutable(caller, review_id)?;

        let asset = self
            .assets
            .get(path)
            .ok_or_else(|| EngineError::not_found(format!("image {path}")))?;
        if asset.review_id != review_id {
            return Err(EngineError::forbidden(format!(
                "image {path} belongs to another review"
            )));
        }

        self.assets.remove(path);
        self.index.remove(path);
        self.reviews.remove_image_path(review_id, path)?;

        info!(review_id, path = %path, "deleted verification image");
        Ok(())
    }

    /// Look up a stored image by its serving path.
    pub fn get_asset(&self, path: &str) -> Option<&ReviewImage> {
        self.assets.get(path)
    }

    /// The certification index over all serving paths.
    pub fn index(&self) -> &CertificationIndex {
        &self.index
    }

    /// The identity signing certification roots.
    pub fn identity(&self) -> &NetworkIdentity {
        &self.identity
    }

    /// Number of stored images.
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}

fn validate_upload(config: &AssetConfig, content_type: &str, bytes: &[u8]) -> EngineResult<()> {
    if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err(EngineError::invalid_input(format!(
            "content type {content_type} is not an accepted image type"
        )));
    }
    if bytes.is_empty() {
        return Err(EngineError::invalid_input("image payload is empty"));
    }
    if bytes.len() > config.max_image_bytes {
        debug!(
            size = bytes.len(),
            cap = config.max_image_bytes,
            "rejecting oversized image"
        );
        return Err(EngineError::invalid_input(format!(
            "image exceeds the {} byte limit",
            config.max_image_bytes
        )));
    }
    Ok(())
}
