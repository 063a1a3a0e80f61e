//! Stencil compositing.
//!
//! Pastes an RGB image onto a transparent RGBA canvas, using a single-channel
//! mask as the alpha stencil.

use image::{GrayImage, Rgba, RgbaImage};

use crate::decode::DecodedImage;

/// Composite `image` onto a fully transparent canvas through `mask`.
///
/// Output alpha equals the mask value and output colour equals the image
/// colour. Where the mask is 0 the pixel is `(0, 0, 0, 0)`.
///
/// Returns `None` if the mask and image dimensions differ.
pub fn apply_alpha_mask(image: &DecodedImage, mask: &GrayImage) -> Option<RgbaImage> {
    if mask.dimensions() != (image.width, image.height) {
        return None;
    }

    let mut canvas = RgbaImage::from_pixel(image.width, image.height, Rgba([0, 0, 0, 0]));

    for ((rgb, alpha), out) in image
        .pixels
        .chunks_exact(3)
        .zip(mask.pixels())
        .zip(canvas.pixels_mut())
    {
        let alpha = alpha.0[0];
        // Skip fully transparent pixels, the canvas already holds them
        if alpha == 0 {
            continue;
        }
        *out = Rgba([rgb[0], rgb[1], rgb[2], alpha]);
    }

    Some(canvas)
}
