//! Image decoding for the portfolio page.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG sources from a path or a byte slice
//! - Applying EXIF orientation so phone portraits come out upright
//! - Resizing decoded images with a selectable interpolation filter
//!
//! All operations are synchronous and allocate their own buffers, so calls
//! on different sources can run on different threads without coordination.

mod resize;
mod source;
mod types;

pub use resize::resize;
pub use source::{decode_file, decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
