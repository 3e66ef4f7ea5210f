//! PNG encoding for saving the edited image.
//!
//! Output is always lossless 8-bit RGB PNG.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;
use tracing::debug;

use crate::decode::PixelBuffer;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded file failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Encode RGB pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Encode a [`PixelBuffer`] to PNG bytes.
pub fn encode_buffer(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    encode_png(&image.pixels, image.width, image.height)
}

/// Encode a [`PixelBuffer`] as PNG and write it to `path`.
///
/// Nothing is written if encoding fails.
pub fn save_png(image: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_buffer(image)?;
    std::fs::write(path, &bytes).map_err(|e| EncodeError::IoError(e.to_string()))?;
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "Saved PNG"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 100 * 100 * 3];

        let png_bytes = encode_png(&pixels, 100, 100).unwrap();

        assert_eq!(&png_bytes[0..8], &PNG_SIGNATURE);
        // IEND chunk type sits 8 bytes before the end (type + CRC)
        let len = png_bytes.len();
        assert_eq!(&png_bytes[len - 8..len - 4], b"IEND");
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let pixels: Vec<u8> = (0..(7 * 5 * 3)).map(|i| (i * 13 % 256) as u8).collect();

        let png_bytes = encode_png(&pixels, 7, 5).unwrap();
        let decoded = image::load_from_memory(&png_bytes).unwrap().into_rgb8();

        assert_eq!(decoded.dimensions(), (7, 5));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn test_encode_png_invalid_pixel_data_short() {
        let pixels = vec![128u8; 99 * 100 * 3]; // One row short

        let result = encode_png(&pixels, 100, 100);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_zero_width() {
        let result = encode_png(&[], 0, 100);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_zero_height() {
        let result = encode_png(&[], 100, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_buffer_matches_raw() {
        let image = PixelBuffer::new(2, 1, vec![255, 0, 0, 0, 0, 255]);
        assert_eq!(
            encode_buffer(&image).unwrap(),
            encode_png(&image.pixels, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_save_png_writes_file() {
        let path = std::env::temp_dir().join(format!("ezedit-save-{}.png", std::process::id()));
        let image = PixelBuffer::new(3, 2, vec![90u8; 3 * 2 * 3]);

        save_png(&image, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(&written[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_save_png_bad_directory() {
        let image = PixelBuffer::new(1, 1, vec![0, 0, 0]);
        let result = save_png(&image, "/nonexistent/ezedit/out.png");
        assert!(matches!(result, Err(EncodeError::IoError(_))));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
