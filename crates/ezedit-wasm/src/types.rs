//! WASM-compatible wrapper types shared by the bindings.
//!
//! These types convert between the core crate's owned Rust values and the
//! representations JavaScript can hold on to.

use std::fmt::Display;

use ezedit_core::{PixelBuffer, Rect};
use wasm_bindgen::prelude::*;

/// An RGB8 image for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// `Uint8Array`; keep images on the WASM side where possible and only
/// extract pixels for drawing.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create an image from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// RGB pixel data as a `Uint8Array` (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// RGBA pixel data with opaque alpha, ready for `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for rgb in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(rgb);
            rgba.push(255);
        }
        rgba
    }
}

impl JsPixelBuffer {
    pub(crate) fn from_buffer(image: PixelBuffer) -> Self {
        Self {
            width: image.width,
            height: image.height,
            pixels: image.pixels,
        }
    }

    /// Copy into a core buffer. Dimensions are not validated here; the core
    /// functions that receive the buffer do that.
    pub(crate) fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A rectangle in source-pixel space, as returned by a crop or a mapping.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.x1.abs_diff(self.x2)
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.y1.abs_diff(self.y2)
    }
}

impl JsRect {
    pub(crate) fn from_rect(rect: Rect) -> Self {
        let narrow = |v: i64| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        Self {
            x1: narrow(rect.x1),
            y1: narrow(rect.y1),
            x2: narrow(rect.x2),
            y2: narrow(rect.y2),
        }
    }
}

/// Display-space rectangle from JS coordinates.
pub(crate) fn rect_from_js(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
    Rect::new(x1.into(), y1.into(), x2.into(), y2.into())
}

/// Log an error to the browser console and convert it for JavaScript.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    let message = err.to_string();
    let value = JsValue::from_str(&message);
    web_sys::console::warn_1(&value);
    value
}
