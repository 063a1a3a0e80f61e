//! Image encoding for the portfolio page.
//!
//! Processed images are handed to the page as PNG bytes so that transparency
//! survives embedding.

mod png;

pub use png::{encode_png_rgb, encode_png_rgba, EncodeError};
