//! Decoding from files and byte slices, with EXIF orientation handling.

use std::io::{self, Cursor};
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};

use super::{DecodeError, DecodedImage, Orientation};

/// Read and decode an image file.
///
/// # Errors
///
/// Returns `DecodeError::NotFound` if the file does not exist, `DecodeError::IoError`
/// if it cannot be read, and the errors of [`decode_image`] otherwise.
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DecodeError::NotFound(path.display().to_string()),
        _ => DecodeError::IoError(format!("{}: {e}", path.display())),
    })?;

    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_image(&bytes)
}

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The container format is guessed from the content, not from a file name.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is unknown or unsupported.
/// Returns `DecodeError::CorruptedFile` if the data cannot be decoded, or decodes
/// to an image with a zero dimension.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = get_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    let decoded = DecodedImage::from_rgb_image(apply_orientation(img, orientation).into_rgb8());
    if decoded.is_empty() {
        return Err(DecodeError::CorruptedFile("image has no pixels".to_string()));
    }

    Ok(decoded)
}

/// Extract EXIF orientation from container bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        });
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, format)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let img = decode_image(&encoded(40, 20, ImageFormat::Png)).unwrap();
        assert_eq!((img.width, img.height), (40, 20));
        assert_eq!(img.pixels.len(), 40 * 20 * 3);
        assert_eq!(img.pixel(0, 0), [255, 0, 0]);
        assert_eq!(img.pixel(39, 19), [0, 0, 255]);
    }

    #[test]
    fn test_decode_jpeg() {
        let img = decode_image(&encoded(64, 32, ImageFormat::Jpeg)).unwrap();
        assert_eq!((img.width, img.height), (64, 32));
    }

    #[test]
    fn test_decode_garbage_is_invalid_format() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = encoded(40, 20, ImageFormat::Png);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode_file(dir.path().join("nope.jpg"));
        assert!(matches!(result, Err(DecodeError::NotFound(_))));
    }

    #[test]
    fn test_decode_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, encoded(10, 12, ImageFormat::Png)).unwrap();

        let img = decode_file(&path).unwrap();
        assert_eq!((img.width, img.height), (10, 12));
    }

    #[test]
    fn test_orientation_without_exif() {
        assert_eq!(get_orientation(&encoded(4, 4, ImageFormat::Png)), Orientation::Normal);
        assert_eq!(get_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    /// JPEG with an APP1 segment carrying a single big-endian IFD0 entry:
    /// Orientation (0x0112, SHORT) = 6, i.e. rotate 90 degrees clockwise.
    fn jpeg_rotated_90(width: u32, height: u32) -> Vec<u8> {
        let jpeg = encoded(width, height, ImageFormat::Jpeg);
        let tiff: &[u8] = &[
            0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // header, IFD0 at 8
            0x00, 0x01, // one entry
            0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, // no next IFD
        ];
        let segment_len = (2 + 6 + tiff.len()) as u16;

        let mut out = Vec::with_capacity(jpeg.len() + segment_len as usize + 2);
        out.extend_from_slice(&jpeg[..2]); // SOI
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&segment_len.to_be_bytes());
        out.extend_from_slice(b"Exif\0\0");
        out.extend_from_slice(tiff);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn test_orientation_from_exif() {
        assert_eq!(get_orientation(&jpeg_rotated_90(16, 8)), Orientation::Rotate90CW);
    }

    #[test]
    fn test_decode_applies_exif_rotation() {
        let img = decode_image(&jpeg_rotated_90(16, 8)).unwrap();
        assert_eq!((img.width, img.height), (8, 16));

        // The red left half of the stored image ends up on top.
        let [r, _, b] = img.pixel(4, 1);
        assert!(r > 200 && b < 60, "top should be red, got {:?}", img.pixel(4, 1));
        let [r, _, b] = img.pixel(4, 14);
        assert!(b > 200 && r < 60, "bottom should be blue, got {:?}", img.pixel(4, 14));
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap());
        let rotated = apply_orientation(img, Orientation::Rotate90CW).into_rgb8();
        assert_eq!(rotated.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap());
        let flipped = apply_orientation(img, Orientation::FlipHorizontal).into_rgb8();
        assert_eq!(flipped.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(flipped.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
