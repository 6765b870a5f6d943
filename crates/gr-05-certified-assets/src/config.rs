//! # Asset Configuration

use serde::{Deserialize, Serialize};

/// Content types accepted for uploaded verification images.
pub const ALLOWED_CONTENT_TYPES: [&str; 4] =
    ["image/png", "image/jpeg", "image/gif", "image/webp"];

/// Default upload size cap: 2 MiB.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Asset store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Maximum accepted image size in bytes.
    pub max_image_bytes: usize,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl AssetConfig {
    /// Create a config for testing (small cap).
    pub fn for_testing() -> Self {
        Self {
            max_image_bytes: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(AssetConfig::default().max_image_bytes, 2_097_152);
    }

    #[test]
    fn test_allowed_content_types() {
        assert!(ALLOWED_CONTENT_TYPES.contains(&"image/png"));
        assert!(!ALLOWED_CONTENT_TYPES.contains(&"application/pdf"));
    }
}
