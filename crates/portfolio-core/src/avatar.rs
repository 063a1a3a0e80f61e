//! Circular profile picture generation.
//!
//! The pipeline is a single pass:
//!
//! 1. Decode the source (JPEG/PNG, EXIF orientation applied)
//! 2. Crop the largest centred square
//! 3. Resize the square to `size x size`
//! 4. Rasterize a circular mask of the same size
//! 5. Composite onto a transparent RGBA canvas with the mask as alpha
//!
//! Cropping before resizing removes the excess dimension, so the subject is
//! never stretched whatever the source aspect ratio.
//!
//! # Fallback
//!
//! The page must always render. [`render_avatar`] and
//! [`circular_avatar_or_placeholder`] turn every decode or processing failure
//! into a solid placeholder of the requested size, log a warning, and report
//! the failure in [`Avatar::fallback_reason`]. Only a size outside
//! `1..=MAX_AVATAR_SIZE` is returned as an error, since that is a caller bug
//! rather than a missing asset.

use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::config::{AvatarConfig, MAX_AVATAR_SIZE};
use crate::decode::{self, DecodeError, DecodedImage};
use crate::encode::{encode_png_rgba, EncodeError};
use crate::mask::{apply_alpha_mask, circle_mask};
use crate::transform::{crop_square, CropRect};

/// Errors from avatar generation.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// The caller passed an unusable parameter (a zero or oversized size).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The source image could not be read or decoded.
    #[error("Failed to decode source image: {0}")]
    Decode(#[from] DecodeError),

    /// An intermediate step produced inconsistent buffers.
    #[error("Image processing failed: {0}")]
    Processing(String),
}

/// A rendered avatar, possibly a placeholder.
#[derive(Debug)]
pub struct Avatar {
    /// `size x size` RGBA pixels.
    pub image: RgbaImage,
    /// Why the placeholder was used, if it was.
    pub fallback_reason: Option<AvatarError>,
}

impl Avatar {
    /// True if the image is the solid placeholder rather than the source.
    pub fn is_placeholder(&self) -> bool {
        self.fallback_reason.is_some()
    }

    /// Encode the image as PNG for embedding.
    pub fn to_png(&self) -> Result<Vec<u8>, EncodeError> {
        encode_png_rgba(self.image.as_raw(), self.image.width(), self.image.height())
    }
}

/// Build a circular avatar from an image file.
///
/// # Errors
///
/// `AvatarError::InvalidArgument` if `size` is zero or above
/// [`MAX_AVATAR_SIZE`], `AvatarError::Decode`
/// if the file is missing or cannot be decoded.
pub fn create_circular_avatar(
    path: impl AsRef<Path>,
    size: u32,
) -> Result<RgbaImage, AvatarError> {
    let config = AvatarConfig::with_size(size);
    validate(&config)?;
    circular_avatar(&decode::decode_file(path)?, &config)
}

/// Build a circular avatar from encoded image bytes.
pub fn create_circular_avatar_from_bytes(
    bytes: &[u8],
    size: u32,
) -> Result<RgbaImage, AvatarError> {
    let config = AvatarConfig::with_size(size);
    validate(&config)?;
    circular_avatar(&decode::decode_image(bytes)?, &config)
}

/// Crop, resize and mask an already decoded image.
pub fn circular_avatar(
    source: &DecodedImage,
    config: &AvatarConfig,
) -> Result<RgbaImage, AvatarError> {
    validate(config)?;
    if source.is_empty() {
        return Err(DecodeError::CorruptedFile("image has no pixels".to_string()).into());
    }

    let rect = CropRect::centered_square(source.width, source.height);
    log::debug!(
        "avatar crop ({}, {}, {}, {}) from {}x{}",
        rect.left,
        rect.top,
        rect.right,
        rect.bottom,
        source.width,
        source.height
    );

    let square = crop_square(source, &rect);
    let resized = decode::resize(&square, config.size, config.size, config.filter)?;
    let mask = circle_mask(config.size);

    apply_alpha_mask(&resized, &mask).ok_or_else(|| {
        AvatarError::Processing(format!(
            "mask is {}x{} but image is {}x{}",
            mask.width(),
            mask.height(),
            resized.width,
            resized.height
        ))
    })
}

/// Like [`create_circular_avatar`], but substitutes the mid-gray placeholder
/// when the source cannot be used.
///
/// # Errors
///
/// Only `AvatarError::InvalidArgument`, for a `size` of zero or above
/// [`MAX_AVATAR_SIZE`].
pub fn circular_avatar_or_placeholder(
    path: impl AsRef<Path>,
    size: u32,
) -> Result<Avatar, AvatarError> {
    render_avatar(path, &AvatarConfig::with_size(size))
}

/// Render the avatar at `path` with explicit settings, falling back to a
/// placeholder on any decode or processing failure.
pub fn render_avatar(path: impl AsRef<Path>, config: &AvatarConfig) -> Result<Avatar, AvatarError> {
    validate(config)?;
    let path = path.as_ref();
    let result = decode::decode_file(path)
        .map_err(AvatarError::from)
        .and_then(|source| circular_avatar(&source, config));
    with_fallback(result, config, &path.display().to_string())
}

/// Render the avatar from encoded bytes, falling back to a placeholder on any
/// decode or processing failure.
pub fn render_avatar_from_bytes(bytes: &[u8], config: &AvatarConfig) -> Result<Avatar, AvatarError> {
    validate(config)?;
    let result = decode::decode_image(bytes)
        .map_err(AvatarError::from)
        .and_then(|source| circular_avatar(&source, config));
    with_fallback(result, config, "<bytes>")
}

/// Solid, fully opaque `size x size` image.
///
/// # Errors
///
/// `AvatarError::InvalidArgument` if `size` is zero or above [`MAX_AVATAR_SIZE`].
pub fn placeholder(size: u32, color: [u8; 4]) -> Result<RgbaImage, AvatarError> {
    validate_size(size)?;
    Ok(RgbaImage::from_pixel(size, size, Rgba(color)))
}

fn validate(config: &AvatarConfig) -> Result<(), AvatarError> {
    validate_size(config.size)
}

fn validate_size(size: u32) -> Result<(), AvatarError> {
    if size == 0 {
        return Err(AvatarError::InvalidArgument(
            "avatar size must be greater than zero".to_string(),
        ));
    }
    if size > MAX_AVATAR_SIZE {
        return Err(AvatarError::InvalidArgument(format!(
            "avatar size {size} exceeds the maximum of {MAX_AVATAR_SIZE}"
        )));
    }
    Ok(())
}

fn with_fallback(
    result: Result<RgbaImage, AvatarError>,
    config: &AvatarConfig,
    source: &str,
) -> Result<Avatar, AvatarError> {
    match result {
        Ok(image) => Ok(Avatar {
            image,
            fallback_reason: None,
        }),
        Err(err @ AvatarError::InvalidArgument(_)) => Err(err),
        Err(err) => {
            log::warn!("Error processing image {source}: {err}; using placeholder");
            Ok(Avatar {
                image: placeholder(config.size, config.fallback_color)?,
                fallback_reason: Some(err),
            })
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_output_is_size_by_size(
            (width, height) in (1u32..=80, 1u32..=80),
            size in 1u32..=96,
        ) {
            let source = DecodedImage::filled(width, height, [50, 60, 70]);
            let avatar = circular_avatar(&source, &AvatarConfig::with_size(size)).unwrap();

            prop_assert_eq!(avatar.dimensions(), (size, size));
        }

        #[test]
        fn prop_alpha_matches_mask(
            (width, height) in (1u32..=40, 1u32..=40),
            size in 1u32..=48,
        ) {
            let source = DecodedImage::filled(width, height, [50, 60, 70]);
            let avatar = circular_avatar(&source, &AvatarConfig::with_size(size)).unwrap();
            let mask = circle_mask(size);

            for (x, y, px) in avatar.enumerate_pixels() {
                prop_assert_eq!(px.0[3], mask.get_pixel(x, y).0[0]);
            }
        }
    }
}
