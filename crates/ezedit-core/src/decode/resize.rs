//! Image resizing for the display copy and the resize preview.
//!
//! All functions return new `PixelBuffer` instances without modifying the input.

use super::{DecodeError, FilterType, PixelBuffer};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if either target dimension is zero and
/// `DecodeError::InvalidPixelData` if the source buffer is malformed.
pub fn resize(
    image: &PixelBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelBuffer, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.to_rgb_image().ok_or(DecodeError::InvalidPixelData {
        expected: image.width as usize * image.height as usize * 3,
        actual: image.pixels.len(),
    })?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(PixelBuffer::from_rgb_image(resized))
}

/// Scale an image so it fits inside a `canvas_width x canvas_height` canvas.
///
/// The aspect ratio is preserved and the image may be scaled up as well as
/// down. Target dimensions are truncated, never rounded up, so the result
/// always fits the canvas.
pub fn fit_to_canvas(
    image: &PixelBuffer,
    canvas_width: u32,
    canvas_height: u32,
    filter: FilterType,
) -> Result<PixelBuffer, DecodeError> {
    let (width, height) =
        calculate_fit_dimensions(image.width, image.height, canvas_width, canvas_height);
    resize(image, width, height, filter)
}

/// Scale an image by a percentage of its current size (100 = unchanged).
pub fn scale_by_percent(
    image: &PixelBuffer,
    percent: u32,
    filter: FilterType,
) -> Result<PixelBuffer, DecodeError> {
    let (width, height) = calculate_percent_dimensions(image.width, image.height, percent);
    resize(image, width, height, filter)
}

/// Dimensions that fit `width x height` into the canvas preserving aspect ratio.
pub(crate) fn calculate_fit_dimensions(
    width: u32,
    height: u32,
    canvas_width: u32,
    canvas_height: u32,
) -> (u32, u32) {
    if width == 0 || height == 0 || canvas_width == 0 || canvas_height == 0 {
        return (0, 0);
    }

    let scale_x = canvas_width as f64 / width as f64;
    let scale_y = canvas_height as f64 / height as f64;

    // The limiting side snaps to the canvas edge exactly
    if scale_x <= scale_y {
        let new_height = (height as f64 * scale_x) as u32;
        (canvas_width, new_height.clamp(1, canvas_height))
    } else {
        let new_width = (width as f64 * scale_y) as u32;
        (new_width.clamp(1, canvas_width), canvas_height)
    }
}

/// Dimensions after scaling by `percent`, truncated, at least 1x1.
pub(crate) fn calculate_percent_dimensions(width: u32, height: u32, percent: u32) -> (u32, u32) {
    let new_width = (width as u64 * percent as u64 / 100) as u32;
    let new_height = (height as u64 * percent as u64 / 100) as u32;
    (new_width.max(1), new_height.max(1))
}
