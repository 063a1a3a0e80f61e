//! Project card thumbnails.
//!
//! Screenshots are shown at their native size and scaled by the page. A
//! missing or broken screenshot is replaced by a solid dark placeholder so the
//! card keeps its shape.

use std::path::Path;

use crate::config::{ProjectImageConfig, MAX_PLACEHOLDER_DIMENSION};
use crate::decode::{self, DecodeError, DecodedImage};
use crate::encode::{encode_png_rgb, EncodeError};

/// A project thumbnail, possibly a placeholder.
#[derive(Debug)]
pub struct ProjectImage {
    pub image: DecodedImage,
    /// Why the placeholder was used, if it was.
    pub fallback_reason: Option<DecodeError>,
}

impl ProjectImage {
    pub fn is_placeholder(&self) -> bool {
        self.fallback_reason.is_some()
    }

    pub fn to_png(&self) -> Result<Vec<u8>, EncodeError> {
        encode_png_rgb(&self.image.pixels, self.image.width, self.image.height)
    }
}

/// Load the screenshot at `path`, or the configured placeholder if it cannot
/// be decoded.
pub fn load_project_image(path: impl AsRef<Path>, config: &ProjectImageConfig) -> ProjectImage {
    let path = path.as_ref();
    with_placeholder(decode::decode_file(path), config, &path.display().to_string())
}

/// Decode a screenshot from bytes, or return the configured placeholder.
pub fn decode_project_image(bytes: &[u8], config: &ProjectImageConfig) -> ProjectImage {
    with_placeholder(decode::decode_image(bytes), config, "<bytes>")
}

fn with_placeholder(
    result: Result<DecodedImage, DecodeError>,
    config: &ProjectImageConfig,
    source: &str,
) -> ProjectImage {
    match result {
        Ok(image) => ProjectImage {
            image,
            fallback_reason: None,
        },
        Err(err) => {
            log::warn!("Project image {source} unavailable: {err}");
            ProjectImage {
                image: project_placeholder(config),
                fallback_reason: Some(err),
            }
        }
    }
}

/// Solid placeholder of the configured size, with each dimension clamped to
/// `1..=MAX_PLACEHOLDER_DIMENSION`.
pub fn project_placeholder(config: &ProjectImageConfig) -> DecodedImage {
    DecodedImage::filled(
        config.width.clamp(1, MAX_PLACEHOLDER_DIMENSION),
        config.height.clamp(1, MAX_PLACEHOLDER_DIMENSION),
        config.placeholder_color,
    )
}
