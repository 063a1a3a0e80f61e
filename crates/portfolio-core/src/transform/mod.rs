//! Geometric transforms applied before resizing.
//!
//! # Coordinate System
//!
//! - Crop coordinates are in source pixels
//! - Origin is the top-left corner

mod crop;

pub use crop::{crop_square, CropRect};
