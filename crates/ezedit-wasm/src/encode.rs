//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_image } from '@ezedit/wasm';
//!
//! const pngBytes = encode_png(pixels, width, height);
//! const blob = new Blob([encode_image(image)], { type: 'image/png' });
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use ezedit_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(to_js_error)
}

/// Encode a `JsPixelBuffer` to PNG bytes.
#[wasm_bindgen]
pub fn encode_image(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_buffer(&image.to_buffer()).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature() {
        let png = encode_png(&[128u8; 10 * 10 * 3], 10, 10).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_image_decodes_back() {
        let pixels: Vec<u8> = (0..(6 * 4 * 3)).map(|i| i as u8).collect();
        let image = JsPixelBuffer::new(6, 4, pixels.clone());

        let png = encode_image(&image).unwrap();
        let decoded = ezedit_core::decode::decode_image(&png).unwrap();
        assert_eq!(decoded.pixels, pixels);
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
    fn test_encode_png_invalid_dimensions() {
        assert!(encode_png(&[128u8; 100], 0, 100).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_pixel_data() {
        assert!(encode_png(&[128u8; 50 * 50 * 3], 100, 100).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_image_invalid() {
        let image = JsPixelBuffer::new(4, 4, vec![0u8; 3]);
        assert!(encode_image(&image).is_err());
    }
}
