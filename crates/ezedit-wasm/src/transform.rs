//! WASM bindings for selection mapping.

use crate::types::{rect_from_js, to_js_error, JsRect};
use ezedit_core::{map_rect_to_source as core_map, ScaleFactor};
use wasm_bindgen::prelude::*;

/// Map a rectangle drawn on the display copy onto source pixels.
///
/// Corners may be given in either drag direction. Each mapped coordinate is
/// `floor(v * scale)` clamped into the source bounds.
///
/// # Errors
///
/// Returns an error if either scale factor is not a finite positive number.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // 500x450 source shown at 250x225
/// const rect = map_rect_to_source(10, 10, 60, 60, 2.0, 2.0, 500, 450);
/// // rect.x1 == 20, rect.x2 == 120
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn map_rect_to_source(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    scale_x: f64,
    scale_y: f64,
    source_width: u32,
    source_height: u32,
) -> Result<JsRect, JsValue> {
    let scale = ScaleFactor::new(scale_x, scale_y).ok_or_else(|| {
        to_js_error(format!(
            "Invalid scale factor ({}, {}): must be finite and positive",
            scale_x, scale_y
        ))
    })?;
    let mapped = core_map(
        rect_from_js(x1, y1, x2, y2),
        scale,
        (source_width, source_height),
    );
    Ok(JsRect::from_rect(mapped))
}


/// WASM-specific tests for error paths, which build `JsValue`s.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_map_rejects_invalid_scale() {
        assert!(map_rect_to_source(0, 0, 10, 10, 0.0, 1.0, 100, 100).is_err());
        assert!(map_rect_to_source(0, 0, 10, 10, 1.0, f64::NAN, 100, 100).is_err());
    }
}
