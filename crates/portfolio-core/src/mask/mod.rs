//! Alpha masks for shaping images.
//!
//! ## Mask Types
//!
//! - **Circle**: the ellipse inscribed in the image bounds, hard edged
//!
//! ## Algorithm
//!
//! Masks are evaluated per pixel at the pixel centre and rasterized into a
//! single-channel image, 255 for inside and 0 for outside. Compositing then
//! uses the mask value directly as output alpha.

pub mod apply;
pub mod circle;

pub use apply::apply_alpha_mask;
pub use circle::{circle_mask, CircleMask, OPAQUE, TRANSPARENT};
