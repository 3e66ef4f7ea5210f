//! Core types shared by the codec and the editing session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bytes per pixel in every [`PixelBuffer`] (RGB8).
pub const CHANNELS: usize = 3;

/// Errors produced while turning bytes into a [`PixelBuffer`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not a JPEG or PNG, or no bytes at all.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Width or height is zero.
    #[error("Image has zero width or height ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Buffer length is not `width * height * 3`.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    IoError(String),
}

/// Resampling filter for the display copy and the resize preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Nearest,
    #[default]
    Bilinear,
    Lanczos3,
}

impl FilterType {
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation tag (values 1-8) of a decoded photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Orientation {
    #[default]
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    /// Mirrored across the main diagonal.
    Transpose,
    Rotate90CW,
    /// Mirrored across the anti-diagonal.
    Transverse,
    Rotate270CW,
}

impl Orientation {
    /// Unknown tag values read as `Normal`.
    pub(crate) fn from_exif(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// An RGB8 raster image.
///
/// `clone()` copies the pixel data, so a cloned buffer never aliases the
/// original. History snapshots rely on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB bytes, `width * height * 3` long.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap pixel data that is already known to match the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Like [`new`](Self::new), but rejects empty images and mismatched data.
    pub fn try_new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(DecodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self::new(width, height, pixels))
    }

    pub(crate) fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// `None` when the data does not match the dimensions.
    pub(crate) fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGB value at (x, y), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.pixels
            .get(idx..idx + CHANNELS)
            .map(|rgb| [rgb[0], rgb[1], rgb[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bilinear_maps_to_triangle() {
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert_eq!(FilterType::default(), FilterType::Bilinear);
    }

    #[test]
    fn test_orientation_from_exif() {
        assert_eq!(Orientation::from_exif(1), Orientation::Normal);
        assert_eq!(Orientation::from_exif(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from_exif(8), Orientation::Rotate270CW);
        assert_eq!(Orientation::from_exif(0), Orientation::Normal);
        assert_eq!(Orientation::from_exif(99), Orientation::Normal);
    }

    #[test]
    fn test_try_new_accepts_matching_data() {
        let img = PixelBuffer::try_new(4, 2, vec![7u8; 24]).unwrap();
        assert_eq!(img.dimensions(), (4, 2));
    }

    #[test]
    fn test_try_new_rejects_zero_dimensions() {
        let result = PixelBuffer::try_new(0, 10, vec![]);
        assert!(matches!(
            result,
            Err(DecodeError::EmptyImage {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_try_new_rejects_short_data() {
        let result = PixelBuffer::try_new(2, 2, vec![0u8; 11]);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidPixelData {
                expected: 12,
                actual: 11
            })
        ));
    }

    #[test]
    fn test_pixel_lookup() {
        let img = PixelBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(img.pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(img.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(img.pixel(2, 0), None);
        assert_eq!(img.pixel(0, 1), None);
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let img = PixelBuffer::new(3, 1, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
        let rgb = img.to_rgb_image().unwrap();
        assert_eq!(PixelBuffer::from_rgb_image(rgb), img);

        let short = PixelBuffer {
            width: 3,
            height: 1,
            pixels: vec![0; 4],
        };
        assert!(short.to_rgb_image().is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = PixelBuffer::new(1, 1, vec![10, 20, 30]);
        let mut copy = original.clone();
        copy.pixels[0] = 99;
        assert_eq!(original.pixels[0], 10);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::EmptyImage {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "Image has zero width or height (0x4)");
    }
}
