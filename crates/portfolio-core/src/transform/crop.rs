//! Centred square cropping.
//!
//! The crop rectangle keeps exact boundaries in `f64`, so an odd difference
//! between width and height yields half-pixel edges (e.g. `left = 0.5`).
//! Pixel extraction floors `left`/`top` and always copies `side` pixels,
//! which keeps the crop inside the source and never distorts the subject.

use crate::decode::DecodedImage;

/// A square crop region in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CropRect {
    /// Largest square centred in a `width x height` image.
    ///
    /// `left = (width - min) / 2`, `top = (height - min) / 2`,
    /// `right = left + min`, `bottom = top + min`.
    pub fn centered_square(width: u32, height: u32) -> Self {
        let min_dim = width.min(height) as f64;
        let left = (width as f64 - min_dim) / 2.0;
        let top = (height as f64 - min_dim) / 2.0;
        Self {
            left,
            top,
            right: left + min_dim,
            bottom: top + min_dim,
        }
    }

    /// Side length of the square.
    pub fn side(&self) -> u32 {
        (self.right - self.left) as u32
    }

    /// Integer origin `(x, y)` of the region, floored.
    pub fn pixel_origin(&self) -> (u32, u32) {
        (self.left.floor() as u32, self.top.floor() as u32)
    }
}

/// Copy the region described by `rect` out of `image`.
///
/// The region is clamped to the image bounds, so a rectangle computed for a
/// different image still produces a valid output. The output is always square:
/// both axes shrink to whichever edge of the image the region runs past first.
pub fn crop_square(image: &DecodedImage, rect: &CropRect) -> DecodedImage {
    let (px_left, px_top) = rect.pixel_origin();

    // Fast path: nothing to remove
    if px_left == 0 && px_top == 0 && rect.side() == image.width && rect.side() == image.height {
        return image.clone();
    }

    let px_left = px_left.min(image.width.saturating_sub(1));
    let px_top = px_top.min(image.height.saturating_sub(1));
    let side = rect
        .side()
        .min(image.width - px_left)
        .min(image.height - px_top)
        .max(1);

    let row_bytes = side as usize * 3;
    let mut output = Vec::with_capacity(row_bytes * side as usize);

    for y in 0..side {
        let start = ((px_top + y) as usize * image.width as usize + px_left as usize) * 3;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: side,
        height: side,
        pixels: output,
    }
}
