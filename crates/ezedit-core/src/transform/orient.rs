//! Lossless quarter-turn rotation and mirroring.
//!
//! These operate on whole pixels only, so applying the inverse sequence always
//! restores the exact input bytes.

use crate::decode::{PixelBuffer, CHANNELS};

/// Rotate 90 degrees clockwise.
///
/// Source pixel `(x, y)` moves to `(H - 1 - y, x)`; the result is `H x W`.
pub fn rotate_clockwise_90(image: &PixelBuffer) -> PixelBuffer {
    let (width, height) = (image.width as usize, image.height as usize);
    let new_w = height;
    let new_h = width;
    let mut dst = vec![0u8; image.pixels.len()];

    for y in 0..height {
        for x in 0..width {
            let src_idx = (y * width + x) * CHANNELS;
            let new_x = height - 1 - y;
            let new_y = x;
            let dst_idx = (new_y * new_w + new_x) * CHANNELS;
            dst[dst_idx..dst_idx + CHANNELS]
                .copy_from_slice(&image.pixels[src_idx..src_idx + CHANNELS]);
        }
    }

    PixelBuffer::new(new_w as u32, new_h as u32, dst)
}

/// Mirror columns (left-right).
pub fn flip_horizontal(image: &PixelBuffer) -> PixelBuffer {
    let width = image.width as usize;
    let row_size = width * CHANNELS;
    let mut dst = Vec::with_capacity(image.pixels.len());

    for row in image.pixels.chunks_exact(row_size) {
        for pixel in row.chunks_exact(CHANNELS).rev() {
            dst.extend_from_slice(pixel);
        }
    }

    PixelBuffer::new(image.width, image.height, dst)
}

/// Mirror rows (top-bottom).
pub fn flip_vertical(image: &PixelBuffer) -> PixelBuffer {
    let row_size = image.width as usize * CHANNELS;
    let mut dst = Vec::with_capacity(image.pixels.len());

    for row in image.pixels.chunks_exact(row_size).rev() {
        dst.extend_from_slice(row);
    }

    PixelBuffer::new(image.width, image.height, dst)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
