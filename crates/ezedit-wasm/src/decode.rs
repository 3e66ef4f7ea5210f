//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, fit_to_canvas } from '@ezedit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const display = fit_to_canvas(image, 500, 450);
//! console.log(`Showing ${image.width}x${image.height} as ${display.width}x${display.height}`);
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use ezedit_core::decode::{self, FilterType};
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG image from bytes.
///
/// EXIF orientation is applied and the result is always RGB8.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(to_js_error)
}

/// Scale an image to fit a canvas, preserving its aspect ratio.
#[wasm_bindgen]
pub fn fit_to_canvas(
    image: &JsPixelBuffer,
    canvas_width: u32,
    canvas_height: u32,
) -> Result<JsPixelBuffer, JsValue> {
    decode::fit_to_canvas(
        &image.to_buffer(),
        canvas_width,
        canvas_height,
        FilterType::Bilinear,
    )
    .map(JsPixelBuffer::from_buffer)
    .map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ezedit_core::encode::encode_png;

    #[test]
    fn test_decode_png_bytes() {
        let pixels = vec![10u8, 20, 30, 40, 50, 60];
        let bytes = encode_png(&pixels, 2, 1).unwrap();

        let image = decode_image(&bytes).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 1);
        assert_eq!(image.pixels(), pixels);
    }

    #[test]
    fn test_fit_to_canvas() {
        let image = JsPixelBuffer::new(1000, 900, vec![0u8; 1000 * 900 * 3]);
        let display = fit_to_canvas(&image, 500, 450).unwrap();
        assert_eq!(display.width(), 500);
        assert_eq!(display.height(), 450);
    }
}

/// WASM-specific tests for error paths, which build `JsValue`s.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_image_invalid() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_image_empty() {
        let result = decode_image(&[]);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_fit_to_canvas_malformed_image() {
        let image = JsPixelBuffer::new(10, 10, vec![0u8; 12]);
        assert!(fit_to_canvas(&image, 500, 450).is_err());
    }
}
