//! PNG encoding for embedding images in the page.
//!
//! PNG keeps the alpha channel, which the circular avatar depends on.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data (4 bytes per pixel, row-major) to PNG bytes.
pub fn encode_png_rgba(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    encode(pixels, width, height, ExtendedColorType::Rgba8, 4)
}

/// Encode RGB pixel data (3 bytes per pixel, row-major) to PNG bytes.
pub fn encode_png_rgb(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    encode(pixels, width, height, ExtendedColorType::Rgb8, 3)
}

fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
    channels: usize,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * channels;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, color)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_rgba_signature() {
        let pixels = vec![100u8; 10 * 10 * 4];
        let png = encode_png_rgba(&pixels, 10, 10).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_rgba_keeps_alpha() {
        let pixels = vec![10, 20, 30, 0, 40, 50, 60, 255];
        let png = encode_png_rgba(&pixels, 2, 1).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn test_encode_rgb() {
        let pixels = vec![0x33u8; 6 * 4 * 3];
        let png = encode_png_rgb(&pixels, 6, 4).unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (6, 4));
    }

    #[test]
    fn test_encode_invalid_dimensions() {
        let result = encode_png_rgba(&[], 0, 10);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_encode_wrong_buffer_length() {
        let result = encode_png_rgba(&[0u8; 12], 2, 2);
        match result {
            Err(EncodeError::InvalidPixelData { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 12);
            }
            other => panic!("Expected InvalidPixelData, got {:?}", other),
        }
    }
}
