//! Pixel-exact cropping.
//!
//! Crop rectangles are in source-pixel coordinates and select the half-open
//! ranges `x1..x2`, `y1..y2`, so a rectangle from `(100, 100)` to
//! `(300, 300)` yields a 200x200 image.

use super::mapping::Rect;
use crate::decode::{PixelBuffer, CHANNELS};

/// Copy the pixels inside `rect` into a new image.
///
/// The rectangle is normalized and clamped to the image first. Returns
/// `None` if nothing is left to copy.
pub fn apply_crop(image: &PixelBuffer, rect: Rect) -> Option<PixelBuffer> {
    let rect = rect.normalized();
    let clamp_x = |v: i64| v.clamp(0, image.width as i64) as usize;
    let clamp_y = |v: i64| v.clamp(0, image.height as i64) as usize;

    let (left, right) = (clamp_x(rect.x1), clamp_x(rect.x2));
    let (top, bottom) = (clamp_y(rect.y1), clamp_y(rect.y2));

    let out_width = right - left;
    let out_height = bottom - top;
    if out_width == 0 || out_height == 0 {
        return None;
    }

    let src_stride = image.width as usize * CHANNELS;
    let row_bytes = out_width * CHANNELS;
    let mut output = Vec::with_capacity(row_bytes * out_height);

    // Copy pixel data row by row
    for y in top..bottom {
        let start = y * src_stride + left * CHANNELS;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Some(PixelBuffer::new(out_width as u32, out_height as u32, output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
